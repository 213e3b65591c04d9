//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod compare;
pub mod contact;
pub mod quiz;
pub mod recommend;
pub mod show;

use clap::Args;

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Sleep position (side, back, stomach, combination).
    #[arg(short, long)]
    pub sleep: String,

    /// What matters most (pain-relief, everyday, plush, hotel).
    #[arg(short, long)]
    pub priority: String,

    /// Comfort feel (soft-plush, medium, firm, extra-firm).
    #[arg(short, long)]
    pub firmness: String,

    /// Budget (budget-friendly, mid-range, premium, luxury).
    #[arg(short, long)]
    pub budget: String,
}

/// Arguments for the quiz command.
#[derive(Args)]
pub struct QuizArgs {
    /// Exit after the first recommendation instead of offering a retake.
    #[arg(long)]
    pub once: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Collection to browse (coir, spring, foam, all).
    #[arg(default_value = "all")]
    pub category: String,

    /// Text search over name, positioning, firmness and features.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Warranty bucket (up-to-5, 5-7, 7-plus, all).
    #[arg(short, long)]
    pub warranty: Option<String>,

    /// Firmness to include; repeat for several.
    #[arg(short, long)]
    pub firmness: Vec<String>,

    /// Price range to include; repeat for several.
    #[arg(short, long)]
    pub price: Vec<String>,

    /// Show the filter panel with counts.
    #[arg(long)]
    pub facets: bool,

    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product slug, e.g. `sky-ortho`.
    pub slug: String,
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Product names or slugs, two or three.
    #[arg(required = true, num_args = 1..)]
    pub products: Vec<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Check that every quiz suggestion is in the catalog.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Message.
    #[arg(short, long)]
    pub message: Option<String>,
}
