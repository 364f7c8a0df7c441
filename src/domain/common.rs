/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> u64;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
