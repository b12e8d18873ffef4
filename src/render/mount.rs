use std::fmt;

use crate::error::{DashboardError, DashboardResult};

/// Identifier of a pre-existing render target that a chart instance binds
/// to exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(id: impl Into<String>) -> DashboardResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DashboardError::InvalidData(
                "mount point id must not be empty".to_owned(),
            ));
        }
        Ok(Self(id))
    }

    // Bypass for ids that are compile-time constants of this crate.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_owned())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
