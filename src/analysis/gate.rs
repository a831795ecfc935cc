//! Applicability check: does a write target the protected directory?

use serde::Deserialize;

/// How a target path is compared against the protected directory name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// Raw substring containment. Also matches names that merely contain
    /// the marker, e.g. `my.ready-check-old/x`.
    #[default]
    Substring,
    /// A path component must equal the marker exactly.
    Segment,
}

/// The designated output directory subject to scanning.
#[derive(Debug, Clone)]
pub struct ProtectedDir {
    marker: String,
    mode: PathMatch,
}

impl ProtectedDir {
    pub fn new(marker: impl Into<String>, mode: PathMatch) -> Self {
        Self {
            marker: marker.into(),
            mode,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check whether `path` references the protected directory.
    pub fn covers(&self, path: &str) -> bool {
        match self.mode {
            PathMatch::Substring => path.contains(&self.marker),
            PathMatch::Segment => path
                .split(['/', '\\'])
                .any(|segment| segment == self.marker),
        }
    }
}
