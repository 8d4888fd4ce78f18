//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `access_validators`: validators for the access configuration sections
//! - `tests`: test suite for all validators

mod access_validators;
mod trait_def;

pub use trait_def::Validate;
