use uuid::Uuid;

/// Source of user identifiers.
///
/// Tokens are opaque to the rest of the domain: they are only compared for
/// equality and must be non-empty and never repeat within a process.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: time-ordered UUIDv7 strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
