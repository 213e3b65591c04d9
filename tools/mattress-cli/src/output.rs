//! Output formatting for the CLI.

use console::style;
use mattress_commerce::catalog::{CatalogItem, PriceRange};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Turn on JSON mode if `json` is set; never turns it off.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json |= json;
        self
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a plain line of text.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("  {}", msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price range colored by tier.
pub fn price_badge(price: PriceRange) -> String {
    let label = price.as_str();
    match price {
        PriceRange::Budget => style(label).green().to_string(),
        PriceRange::MidRange => style(label).cyan().to_string(),
        PriceRange::Premium => style(label).magenta().to_string(),
        PriceRange::Luxury => style(label).yellow().bold().to_string(),
    }
}

/// Warranty in the storefront's wording, e.g. "120 Months".
pub fn format_warranty(months: u32) -> String {
    format!("{} Months", months)
}

/// One-line product summary used in lists.
pub fn product_line(item: &CatalogItem<'_>) -> String {
    format!(
        "{} {} {}",
        style(item.name()).bold(),
        style("-").dim(),
        item.product.positioning
    )
}
