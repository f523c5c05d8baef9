//! Data contracts and presentation logic shared by the dashboard frontend.
//!
//! Everything here is plain Rust without browser bindings, so the formatting,
//! aggregation and view-state rules run under `cargo test`.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
