//! Built-in Skyindia collection.

use crate::catalog::{Catalog, Firmness, PriceRange, Product};

use Firmness::{Firm, Medium, Soft};
use PriceRange::{Budget, Luxury, MidRange, Premium};

const SKY_ORTHO_DESCRIPTION: &str = "Our flagship orthopedic mattress uses breathable open-cell technology specifically designed for Kerala's humid climate, keeping you cool throughout the night. As a factory-direct product, we eliminate middlemen to offer premium quality at honest prices. Built with high-density coir and heat-tempered support, durability is guaranteed with our 5-year warranty.";

const SKY_SAPPHIRE_DESCRIPTION: &str = "Experience hotel-grade comfort at home with our pocket spring mattress featuring individually wrapped coils for superior motion isolation. Our breathable open-cell foam layers ensure cooling comfort suited for Kerala's climate. As a factory-direct manufacturer, we cut out middlemen to deliver premium quality at significantly lower prices, backed by our 7-year durability guarantee.";

const SKY_LATEX_BLISS_DESCRIPTION: &str = "Our premium natural latex mattress combines cloud-like softness with exceptional durability. The breathable open-cell technology ensures optimal airflow, perfect for Kerala's humid climate. As a factory-direct manufacturer, we eliminate middlemen to offer genuine luxury at honest prices. Built with high-density latex and superior craftsmanship, this mattress comes with our longest warranty of 10 years.";

pub(crate) fn builtin_catalog() -> Catalog {
    Catalog::from_partitions_unchecked([coir(), spring(), foam()])
}

fn coir() -> Vec<Product> {
    vec![
        Product::new("SKY LITE", 24, "Budget friendly", Firm, Budget)
            .with_features(["Coir support core", "Value option", "Guest rooms"]),
        Product::new("SKY ECO", 30, "Value for money", Firm, Budget)
            .with_features(["Balanced support", "Durable coir", "Everyday use"]),
        Product::new("SKY PRIME", 36, "Great value", Medium, MidRange)
            .with_features(["Enhanced comfort", "Supportive feel", "Regular use"]),
        Product::new("SKY ORTHO", 60, "Orthopedic support", Firm, Premium)
            .with_features(["Firm support", "Spine alignment", "Back care"])
            .with_description(SKY_ORTHO_DESCRIPTION),
        Product::new("SKY STAR", 72, "Luxury at affordable price", Medium, Premium)
            .with_features(["Premium fabric", "Balanced comfort", "Long warranty"]),
        Product::new("SKY SOFT", 72, "Luxurious with latex", Soft, Premium)
            .with_features(["Latex comfort", "Soft top feel", "Good airflow"]),
        Product::new("SKY NIMBUS", 72, "Top of the line luxury", Medium, Luxury)
            .with_features(["Multi layer", "Plush support", "Flagship model"]),
    ]
}

fn spring() -> Vec<Product> {
    vec![
        Product::new("SKY SAPPHIRE", 84, "Premium pocketed spring with motion isolation", Medium, Premium)
            .with_features(["Pocketed springs", "Motion isolation", "Responsive support"])
            .with_description(SKY_SAPPHIRE_DESCRIPTION),
        Product::new("SKY EMERALD", 60, "Classic Bonnell spring comfort", Medium, MidRange)
            .with_features(["Bonnell springs", "Classic feel", "Durable construction"]),
        Product::new("SKY RUBY", 72, "Hybrid spring with balanced support", Medium, Premium)
            .with_features(["Hybrid design", "Balanced comfort", "Premium springs"]),
        Product::new("SKY OPAL", 60, "Soft comfort with spring support", Soft, MidRange)
            .with_features(["Soft top layer", "Spring support", "Cooling fabric"]),
        Product::new("SKY LUXURY", 84, "Luxury pillow-top spring indulgence", Soft, Luxury)
            .with_features(["Luxury springs", "Plush comfort", "Hotel quality"]),
        Product::new("SKY PARADISE", 84, "Premium high-coil spring support", Medium, Luxury)
            .with_features(["Premium coils", "Enhanced support", "Breathable"]),
        Product::new("SKY ECSTASY", 120, "Ultimate comfort with gel technology", Soft, Luxury)
            .with_features(["Ultra comfort", "Advanced springs", "Pressure relief"]),
        Product::new("SKY HOTEL SERIES", 120, "Commercial-grade hotel standard", Medium, Premium)
            .with_features(["Commercial grade", "Long lasting", "Hotel standard"]),
    ]
}

fn foam() -> Vec<Product> {
    vec![
        Product::new("SKY PETAL", 60, "Memory foam body-contouring comfort", Soft, MidRange)
            .with_features(["Memory foam", "Body contouring", "Soft comfort"]),
        Product::new("SKY ROSE", 72, "High-density firm foam support", Firm, Premium)
            .with_features(["High density foam", "Firm support", "Durable"]),
        Product::new("SKY DAISY", 36, "Balanced responsive foam value", Medium, Budget)
            .with_features(["Multi layer foam", "Balanced feel", "Affordable"]),
        Product::new("SKY ECO BOND", 30, "Budget bonded foam solution", Medium, Budget)
            .with_features(["Eco friendly", "Bonded foam", "Value option"]),
        Product::new("SKY IRIS", 84, "Responsive premium foam support", Medium, Premium)
            .with_features(["Premium foam", "Responsive", "Great support"]),
        Product::new("SKY LATEX BLISS", 120, "Natural latex cooling luxury", Soft, Luxury)
            .with_features(["Natural latex", "Cooling comfort", "Hypoallergenic"])
            .with_description(SKY_LATEX_BLISS_DESCRIPTION),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let revalidated = Catalog::from_file(builtin.to_file()).unwrap();
        assert_eq!(revalidated, builtin);
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.count(Category::Coir), 7);
        assert_eq!(catalog.count(Category::Spring), 8);
        assert_eq!(catalog.count(Category::Foam), 6);
        assert_eq!(catalog.len(), 21);
    }

    #[test]
    fn test_coir_firmness_profile() {
        let catalog = Catalog::builtin();
        let firmness: Vec<Firmness> = catalog
            .products_in(Category::Coir)
            .iter()
            .map(|p| p.firmness)
            .collect();
        assert_eq!(firmness, vec![Firm, Firm, Medium, Firm, Medium, Soft, Medium]);
    }

    #[test]
    fn test_flagships() {
        let catalog = Catalog::builtin();
        let flagships: Vec<&str> = catalog
            .all_items()
            .filter(|i| i.product.is_flagship())
            .map(|i| i.name())
            .collect();
        assert_eq!(flagships, vec!["SKY ORTHO", "SKY SAPPHIRE", "SKY LATEX BLISS"]);
    }
}
