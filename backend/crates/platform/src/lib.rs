//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, adaptive cost)
//! - Signed, time-boxed bearer tokens (HS256 JWT)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod password;
pub mod token;
