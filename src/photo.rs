use std::path::PathBuf;

/// One entry of the carousel. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDescriptor {
    pub path: PathBuf,
    pub label: String,
}

impl PhotoDescriptor {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Labels follow the sequence order: "<subject> 0", "<subject> 1", ...
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>, subject: &str) -> Vec<Self> {
        paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| Self::new(path, format!("{} {}", subject, i)))
            .collect()
    }
}
