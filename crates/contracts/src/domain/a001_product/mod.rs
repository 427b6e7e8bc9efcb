pub mod aggregate;

pub use aggregate::{Product, ProductField, ProductListResponse, SkuRequest};
