//! `metaseek` crate (library surface).
//!
//! The primary entrypoint for end users is the `metaseek` binary. This
//! library module exists to support embedding and to provide a stable
//! way to reuse the core types without depending on internal crate
//! layout.

pub use metaseek_core as core;
pub use metaseek_providers as providers;
