// @file: capital_history/src/utils/mod.rs
// @description: Configuration, time conversion, query building and signing helpers.
// @author: LAS.

pub mod config;
pub mod time_codec;
pub mod query;
pub mod signing;
