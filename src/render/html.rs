use std::fmt::Write as _;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::ChartConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartRenderer, MountPoint};

/// Capability that emits a self-contained dashboard page.
///
/// Declared mount points become `<canvas>` elements; each bound config is
/// embedded as a declarative chart constructor call against its canvas.
/// Binding a mount point that was never declared is a fatal configuration
/// error, the same way a browser engine fails on a missing element.
#[derive(Debug)]
pub struct HtmlPageRenderer {
    title: String,
    mounts: Vec<String>,
    bound: IndexMap<String, ChartConfig>,
}

impl HtmlPageRenderer {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mounts: Vec::new(),
            bound: IndexMap::new(),
        }
    }

    /// Declares a render target. Re-declaring an id is a no-op.
    pub fn declare_mount(&mut self, mount: &MountPoint) {
        if !self.mounts.iter().any(|id| id == mount.id()) {
            self.mounts.push(mount.id().to_owned());
        }
    }

    #[must_use]
    pub fn with_mount(mut self, mount: &MountPoint) -> Self {
        self.declare_mount(mount);
        self
    }

    #[must_use]
    pub fn declared_mounts(&self) -> &[String] {
        &self.mounts
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Renders the final document: one canvas per declared mount point, one
    /// chart constructor per bound config.
    #[must_use]
    pub fn into_document(self) -> String {
        let mut page = String::new();
        let _ = writeln!(page, "<!DOCTYPE html>");
        let _ = writeln!(page, "<html lang=\"en\">");
        let _ = writeln!(page, "<head>");
        let _ = writeln!(page, "<meta charset=\"utf-8\">");
        let _ = writeln!(page, "<title>{}</title>", self.title);
        let _ = writeln!(
            page,
            "<script src=\"https://cdn.jsdelivr.net/npm/chart.js\"></script>"
        );
        let _ = writeln!(page, "</head>");
        let _ = writeln!(page, "<body>");
        let _ = writeln!(page, "<h1>{}</h1>", self.title);

        for mount in &self.mounts {
            let _ = writeln!(
                page,
                "<div class=\"panel\"><canvas id=\"{mount}\"></canvas></div>"
            );
        }

        let _ = writeln!(page, "<script>");
        for (mount, config) in &self.bound {
            let _ = writeln!(
                page,
                "new Chart(document.getElementById(\"{mount}\"), {});",
                config.to_engine_value()
            );
        }
        let _ = writeln!(page, "</script>");
        let _ = writeln!(page, "</body>");
        let _ = writeln!(page, "</html>");
        page
    }
}

impl ChartRenderer for HtmlPageRenderer {
    fn bind(&mut self, mount: &MountPoint, config: ChartConfig) -> DashboardResult<()> {
        config.validate()?;
        if !self.mounts.iter().any(|id| id == mount.id()) {
            return Err(DashboardError::UnknownMountPoint(mount.id().to_owned()));
        }
        if self.bound.contains_key(mount.id()) {
            return Err(DashboardError::MountPointOccupied(mount.id().to_owned()));
        }
        debug!(
            mount = mount.id(),
            kind = config.kind.as_str(),
            labels = config.labels.len(),
            "bind chart config"
        );
        self.bound.insert(mount.id().to_owned(), config);
        Ok(())
    }
}
