//! CLI command implementations

pub mod blend;
pub mod clip;
pub mod inspect;

mod reporting;
