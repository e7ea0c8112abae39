//! Gymkeep Core - Domain records, validation, queries and the service facade.
//!
//! This crate contains the core logic for managing a gym's members, classes
//! and trainers. It has no dependencies on other Gymkeep crates; storage is
//! reached through the [`Collection`] trait.

pub mod clock;
pub mod error;
pub mod gym_class;
pub mod id;
pub mod member;
pub mod query;
pub mod record;
pub mod service;
pub mod storage;
pub mod trainer;
pub mod validation;

// Re-exports for convenience
pub use clock::{Clock, SystemClock};
pub use error::{CoreError, StorageError, ValidationError};
pub use gym_class::{GymClass, GymClassPatch, GymClassPayload};
pub use id::{IdGenerator, UuidGenerator};
pub use member::{Member, MemberField, MemberPatch, MemberPayload};
pub use record::{EntityKind, Record};
pub use service::GymService;
pub use storage::Collection;
pub use trainer::{Trainer, TrainerPatch, TrainerPayload};
pub use validation::Validator;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::ManualClock;
#[cfg(any(test, feature = "test-utils"))]
pub use id::SequentialIds;
#[cfg(any(test, feature = "test-utils"))]
pub use service::in_memory_service;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemoryCollection;
