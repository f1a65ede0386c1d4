use uuid::Uuid;

/// Source of fresh opaque request identifiers.
///
/// Routing only needs "give me a new string"; the trait keeps the random
/// source swappable so tests can pin identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator: random UUID v4 in hyphenated form.
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
