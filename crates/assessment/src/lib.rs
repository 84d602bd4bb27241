//! Assessment façade: turns a raw request into a lookup, a density choice, and an impact estimate.

pub mod request;
pub mod response;

pub use facade::*;

mod facade;
