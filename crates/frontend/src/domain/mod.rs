//! Domain modules of the admin console

pub mod a001_category;
pub mod a002_product;
