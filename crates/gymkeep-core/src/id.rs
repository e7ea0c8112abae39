use uuid::Uuid;

/// Produces identifiers for new records.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use sequential::SequentialIds;

#[cfg(any(test, feature = "test-utils"))]
mod sequential {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::IdGenerator;

    /// Predictable ids (`{prefix}-1`, `{prefix}-2`, ...) for tests.
    pub struct SequentialIds {
        prefix: &'static str,
        next: AtomicU64,
    }

    impl SequentialIds {
        pub fn new(prefix: &'static str) -> Self {
            Self {
                prefix,
                next: AtomicU64::new(1),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn new_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{}-{}", self.prefix, n)
        }
    }
}
