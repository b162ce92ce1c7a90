pub mod errors;
pub mod product;

pub use errors::DomainError;
pub use product::{Product, ProductReference, PRODUCT_ENTITY};
