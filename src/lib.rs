//! sync-template-registry - Glint template registry generator
//!
//! Keeps an Ember addon's template registry file in sync with the
//! `declare module '@glint/environment-ember-loose/registry'` blocks
//! declared next to its components, helpers and modifiers.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Options and fixed constants
//! - `core`: Extraction, aggregation and registry file generation

pub mod cli;
pub mod config;
pub mod core;
