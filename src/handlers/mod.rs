//! HTTP handlers for the pessoa resource.

pub mod person;
pub use person::*;
