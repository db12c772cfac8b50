pub mod aggregate;

pub use aggregate::{CreatedProduct, ProductCreateRequest};
