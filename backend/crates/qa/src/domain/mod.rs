//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question, Answer)
//! - Domain value objects (QuestionTitle, PostContent)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
