pub mod get_product;
pub mod health;
