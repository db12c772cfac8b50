pub mod common;

pub mod a001_category;
pub mod a002_product;
