//! Problem input types.
//!
//! - [`City`] — a labelled 2-D point
//! - [`Instance`] — a validated city set with its precomputed distance matrix

mod city;
mod instance;

pub use city::City;
pub use instance::Instance;
