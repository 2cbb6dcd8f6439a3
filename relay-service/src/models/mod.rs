pub mod file_type;
pub mod generation;

pub use file_type::ArtifactKind;
pub use generation::{GenerationRequest, Objectives, Tone};
