// @file: capital_history/src/tests/mod.rs
// @description: Unit test suites for the codec, query builder, signer, fetcher, formatters and config.
// @author: LAS.

mod support;
mod time_codec_tests;
mod query_tests;
