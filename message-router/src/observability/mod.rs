//! Structured observability vocabulary shared by the router and its binaries.

pub mod events;
pub mod fields;
