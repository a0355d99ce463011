//! Tests for credential validation

mod password_tests;
