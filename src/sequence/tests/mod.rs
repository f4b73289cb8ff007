//! Sequence generator tests
