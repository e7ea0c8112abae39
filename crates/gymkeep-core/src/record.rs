use serde::de::DeserializeOwned;
use serde::Serialize;

/// The three independent collections kept by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Member,
    GymClass,
    Trainer,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Member => write!(f, "Member"),
            EntityKind::GymClass => write!(f, "Gym class"),
            EntityKind::Trainer => write!(f, "Trainer"),
        }
    }
}

/// A stored record with a generated identifier and store-managed timestamps.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Which collection this record lives in.
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn created_at(&self) -> u64;

    fn updated_at(&self) -> Option<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Member.to_string(), "Member");
        assert_eq!(EntityKind::GymClass.to_string(), "Gym class");
        assert_eq!(EntityKind::Trainer.to_string(), "Trainer");
    }
}
