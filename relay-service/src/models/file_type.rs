use std::fmt;

/// Downloadable artifacts produced by the workflow engine.
///
/// The set is closed: anything else in the download path is rejected before
/// the engine is contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Articles,
    Strategy,
}

impl ArtifactKind {
    pub const VALID_NAMES: &'static str = "articles.json, strategy.md";

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "articles.json" => Some(Self::Articles),
            "strategy.md" => Some(Self::Strategy),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Articles => "articles.json",
            Self::Strategy => "strategy.md",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
