use crate::{record::Record, value::Value};
use serde::{Deserialize, Serialize};

///
/// Product
///
/// A catalog entry. `price` and `stock` are non-negative; `available`
/// is the listing flag, independent of stock (a listed product can still
/// be out of stock).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub available: bool,
}

impl Product {
    fn new(
        id: u32,
        name: &str,
        brand: &str,
        category: &str,
        price: f64,
        stock: u32,
        available: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            stock,
            available,
        }
    }

    /// The fixed ten-product sample catalog.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new(1, "iPhone 15", "Apple", "Smartphone", 999.99, 10, true),
            Self::new(2, "Samsung Galaxy S24", "Samsung", "Smartphone", 899.99, 8, true),
            Self::new(3, "MacBook Air M3", "Apple", "Laptop", 1299.99, 5, true),
            Self::new(4, "Dell XPS 13", "Dell", "Laptop", 1199.99, 0, false),
            Self::new(5, "Sony WH-1000XM5", "Sony", "Audífonos", 399.99, 15, true),
            Self::new(6, "iPad Air", "Apple", "Tablet", 599.99, 3, true),
            Self::new(7, "Samsung Galaxy Tab", "Samsung", "Tablet", 449.99, 0, false),
            Self::new(8, "AirPods Pro", "Apple", "Audífonos", 249.99, 20, true),
            Self::new(9, "Logitech MX Keys", "Logitech", "Accesorios", 99.99, 12, true),
            Self::new(10, "HP Pavilion", "HP", "Laptop", 799.99, 2, true),
        ]
    }
}

impl Record for Product {
    fn fields() -> &'static [&'static str] {
        &["id", "name", "brand", "category", "price", "stock", "available"]
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "name" => Some(Value::from(self.name.as_str())),
            "brand" => Some(Value::from(self.brand.as_str())),
            "category" => Some(Value::from(self.category.as_str())),
            "price" => Some(Value::from(self.price)),
            "stock" => Some(Value::from(self.stock)),
            "available" => Some(Value::from(self.available)),
            _ => None,
        }
    }
}
