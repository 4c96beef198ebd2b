//! Vizij loop fixer CLI library.
//!
//! Command implementations and the directory-backed clip store used by the
//! `vizij-loopfix` binary.

pub mod commands;
pub mod dir_store;
