// @file: capital_history/src/core/mod.rs
// @description: Exports the fetcher, its transport seam and shared data structures.
// @author: LAS.

pub mod errors;
pub mod models;
pub mod interfaces;
pub mod fetcher;
