//! # Domain Models
//!
//! Pure configuration and registry types shared by every EDU PATH crate.
//! Keep it lean: `serde` is the only dependency, and nothing here performs I/O.

pub mod config;
pub mod constants;
pub mod registry;
