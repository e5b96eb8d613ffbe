//! Configuration module
//!
//! Settings a host supplies to the editing core, most importantly the
//! prefix used when generating fresh column names.

pub mod config;

pub use config::EditorConfig;
