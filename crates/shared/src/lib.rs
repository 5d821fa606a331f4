//! Shared utilities for the HOA Office backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Cryptographic helpers (hashing, token generation)
//! - Password hashing with Argon2id
//! - JWT issuing and validation
//! - Common validation logic

pub mod crypto;
pub mod jwt;
pub mod password;
pub mod validation;
