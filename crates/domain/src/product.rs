use std::fmt;

use crate::errors::DomainError;

pub const PRODUCT_ENTITY: &str = "Product";

/// Key addressing a single product. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductReference(String);

impl ProductReference {
    pub fn new(reference: impl Into<String>) -> Result<Self, DomainError> {
        let reference = reference.into();
        if reference.is_empty() {
            return Err(DomainError::InvalidParameter(
                "reference must not be empty".to_string(),
            ));
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product as seen by the use-case layer.
///
/// Fields are fixed at construction; there are no mutators. Storage and cache
/// encodings live with their repositories and are decoded into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    reference: ProductReference,
    brand_id: String,
}

impl Product {
    pub fn new(reference: ProductReference, brand_id: impl Into<String>) -> Self {
        Self {
            reference,
            brand_id: brand_id.into(),
        }
    }

    pub fn reference(&self) -> &ProductReference {
        &self.reference
    }

    pub fn brand_id(&self) -> &str {
        &self.brand_id
    }
}
