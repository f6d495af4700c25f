pub mod normalizer;
pub use normalizer::{DecodeError, FieldPath, Normalizer};

mod projector;
pub use projector::project;

pub mod types;
