use indexmap::IndexMap;

use crate::core::ChartConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartRenderer, MountPoint};

/// No-op capability used by tests and headless dashboard assembly.
///
/// It still validates every config so callers can catch alignment mistakes
/// before a real backend is introduced, and it records what it was handed
/// keyed by mount point in bind order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    bound: IndexMap<String, ChartConfig>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    #[must_use]
    pub fn config_for(&self, mount: &MountPoint) -> Option<&ChartConfig> {
        self.bound.get(mount.id())
    }

    /// Mount ids in bind order.
    #[must_use]
    pub fn mount_ids(&self) -> Vec<&str> {
        self.bound.keys().map(String::as_str).collect()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn bind(&mut self, mount: &MountPoint, config: ChartConfig) -> DashboardResult<()> {
        config.validate()?;
        if self.bound.contains_key(mount.id()) {
            return Err(DashboardError::MountPointOccupied(mount.id().to_owned()));
        }
        self.bound.insert(mount.id().to_owned(), config);
        Ok(())
    }
}
