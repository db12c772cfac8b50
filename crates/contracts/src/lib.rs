//! Shared data contracts between the admin console and the catalog API.

pub mod domain;
