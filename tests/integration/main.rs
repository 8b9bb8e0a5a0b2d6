//! Integration tests

mod config_test;
mod report_test;
mod valuation_test;
