//! Value Object Module

pub mod score;
pub mod user_name;
pub mod user_password;
