//! Integration test harness

mod extractor_tests;
