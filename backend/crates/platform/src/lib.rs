//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, constant-time comparison)
//! - Password hashing (Argon2id, with legacy SHA-256 verification)
//! - Time source abstraction for measurable elapsed time
//! - Seedable pseudo-random source

pub mod clock;
pub mod crypto;
pub mod password;
pub mod random;
