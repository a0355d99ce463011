//! Tests for the token authenticator
