//! Built-in products used by scenarios and as the default catalog.
use shelf_engine::{Product, Rating, Variant};

pub fn two_variant_tee() -> Product {
    Product {
        price: Some(20.0),
        image: "https://images.example.com/tee.png".into(),
        rating: Some(Rating {
            rate: 4.4,
            count: 1500,
        }),
        available: Some(true),
        variants: vec![
            Variant::new("a", "A").with_available(true),
            Variant::new("b", "B").with_available(false),
        ],
        ..Product::new("tee", "Tee")
    }
}

pub fn sold_out_lamp() -> Product {
    Product {
        price: Some(145.0),
        available: Some(false),
        variants: vec![
            Variant::new("warm", "Warm white"),
            Variant::new("cool", "Cool white"),
        ],
        ..Product::new("lamp", "Desk Lamp")
    }
}

pub fn plain_mug() -> Product {
    Product {
        price: Some(18.0),
        image: "https://images.example.com/mug.png".into(),
        variant_label: Some("12 oz".into()),
        ..Product::new("mug", "Stoneware Mug")
    }
}

pub fn sized_sweater() -> Product {
    Product {
        price_min: Some(64.5),
        price_max: Some(79.0),
        description: Some("Fine-gauge merino knit.".into()),
        variants: vec![
            Variant::new("s", "Small"),
            Variant::new("m", "Medium"),
            Variant::new("l", "Large"),
        ],
        ..Product::new("crew", "Merino Crew")
    }
}

/// Catalog used when no `--catalog` file is given.
pub fn default_products() -> Vec<Product> {
    vec![two_variant_tee(), sold_out_lamp(), plain_mug(), sized_sweater()]
}
