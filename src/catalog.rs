//! The fixed product catalog seeded into the content backend.

/// One product row as authored in the seed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductDescriptor {
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
    /// Path relative to the product image directory.
    pub image_filename: &'static str,
}

impl ProductDescriptor {
    pub const fn new(
        name: &'static str,
        price: f64,
        description: &'static str,
        image_filename: &'static str,
    ) -> Self {
        Self {
            name,
            price,
            description,
            image_filename,
        }
    }
}

// Names are kept exactly as authored, including the stray leading spaces.
static PRODUCTS: [ProductDescriptor; 19] = [
    ProductDescriptor::new(
        "Flagship 5G Smartphone",
        899.99,
        "High-end 5G smartphone...",
        "product_1.png",
    ),
    ProductDescriptor::new(
        "Ultra-Portable Laptop (13-inch)",
        1199.00,
        "Lightweight and powerful laptop...",
        "product_2.jpg",
    ),
    ProductDescriptor::new(
        "Smart Inverter Washing Machine (8kg)",
        649.50,
        "Energy-efficient washing machine...",
        "product_3.png",
    ),
    ProductDescriptor::new(
        "High-Velocity Pedestal Fan",
        79.99,
        "Powerful 3-speed pedestal fan...",
        "product_4.png",
    ),
    ProductDescriptor::new(
        "Noise-Cancelling Wireless Headphones",
        199.00,
        "Over-ear headphones...",
        "product_5.png",
    ),
    ProductDescriptor::new(
        "4K Ultra HD Smart TV (55-inch)",
        799.00,
        "Vibrant 4K UHD display...",
        "product_6.png",
    ),
    ProductDescriptor::new(
        "Gaming Desktop PC (RTX 4070)",
        1899.99,
        "Ready-to-go gaming rig...",
        "product_7.png",
    ),
    ProductDescriptor::new(
        "Compact Microwave Oven (700W)",
        59.99,
        "Essential compact microwave...",
        "product_8.png",
    ),
    ProductDescriptor::new(
        "Ergonomic Wireless Mouse",
        35.50,
        "Contoured wireless mouse...",
        "product_9.png",
    ),
    ProductDescriptor::new(
        " Portable Bluetooth Speaker",
        89.00,
        "Waterproof and rugged speaker...",
        "product_10.png",
    ),
    ProductDescriptor::new(
        "Electric Kettle (1.7 Litre)",
        45.00,
        "Fast-boiling electric kettle...",
        "product_11.png",
    ),
    ProductDescriptor::new(
        "Smart Home Hub",
        149.00,
        "Central device to control smart lights...",
        "product_12.png",
    ),
    ProductDescriptor::new(
        " Mesh Wi-Fi System (3-Pack)",
        229.00,
        "Eliminate dead zones...",
        "product_13.png",
    ),
    ProductDescriptor::new(
        "Digital Camera (Mirrorless)",
        999.00,
        "Compact mirrorless camera...",
        "product_14.png",
    ),
    ProductDescriptor::new(
        "Air Purifier (HEPA Filter)",
        185.00,
        "Removes 99.97% of airborne particles...",
        "product_15.png",
    ),
    ProductDescriptor::new(
        "Gaming Keyboard (Mechanical)",
        119.99,
        "Tactile mechanical keyboard...",
        "product_16.png",
    ),
    ProductDescriptor::new(
        "Cordless Stick Vacuum",
        299.00,
        "Lightweight, powerful cordless vacuum...",
        "product_17.png",
    ),
    ProductDescriptor::new(
        "Portable Power Bank (20000mAh)",
        49.00,
        "High-capacity power bank...",
        "product_18.png",
    ),
    ProductDescriptor::new(
        "Wireless Charging Pad (Dual)",
        39.99,
        "Dual wireless charging pad...",
        "product_19.png",
    ),
];

/// All seed products in declaration order.
pub fn products() -> &'static [ProductDescriptor] {
    &PRODUCTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_declaration_order() {
        let all = products();
        assert_eq!(all.len(), 19);
        assert_eq!(all[0].name, "Flagship 5G Smartphone");
        assert_eq!(all[1].image_filename, "product_2.jpg");
        assert_eq!(all[18].name, "Wireless Charging Pad (Dual)");
    }

    #[test]
    fn prices_are_positive() {
        assert!(products().iter().all(|p| p.price > 0.0));
    }
}
