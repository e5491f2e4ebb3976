use uuid::Uuid;

/// Source of fresh post identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time ordered uuid v7 ids: 48 bits of milliseconds followed by 74 random bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
