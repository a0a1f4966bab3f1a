//! Domain models
//!
//! Request bodies are validated by deserialization; a body that does not
//! fit `NewItem` never reaches the database layer.

pub mod item;
pub mod validation;

pub use item::{ItemRow, NewItem};
pub use validation::ValidationError;
