pub mod boundary;
pub mod errors;
pub mod factory;
pub mod interactors;
pub mod serializers;
pub mod views;

pub use boundary::BoundaryAdapter;
pub use errors::UseCaseError;
pub use factory::CatalogFactory;
pub use interactors::{GetProductInteractor, GetProductParams};
pub use serializers::ProductSerializer;
pub use views::{ProductView, ResultEnvelope};
