pub mod get_product;

pub use get_product::{GetProductInteractor, GetProductParams};
