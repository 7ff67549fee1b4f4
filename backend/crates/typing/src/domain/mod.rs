//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Corpus, Trial, PlaySession)
//! - Domain value objects (Passage, Wpm, AttemptOutcome)
//! - Domain services (word count, WPM, attempt evaluation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
