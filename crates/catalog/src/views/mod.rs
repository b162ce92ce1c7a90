pub mod product_view;

pub use product_view::{ProductView, ResultEnvelope};
