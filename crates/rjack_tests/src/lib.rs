//! rjack_tests: End-to-end conformance tests for the Jack front-end.
//!
//! The suite lives in `tests/conformance_tests.rs`; this crate only exists
//! to give it a workspace member to hang off.
