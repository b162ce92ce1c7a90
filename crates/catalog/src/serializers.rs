use domain::Product;
use serde_json::{json, Value};

/// Wire projection of a product
pub struct ProductSerializer;

impl ProductSerializer {
    pub fn serialize(product: &Product) -> Value {
        json!({
            "reference": product.reference().as_str(),
            "brand_id": product.brand_id(),
        })
    }
}
