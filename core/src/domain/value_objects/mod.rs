//! Value objects representing immutable domain concepts.

pub mod gate_outcome;

// Re-export commonly used types
pub use gate_outcome::GateOutcome;
