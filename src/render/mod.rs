mod html;
mod mount;
mod recording;

pub use html::HtmlPageRenderer;
pub use mount::MountPoint;
pub use recording::RecordingRenderer;

use crate::core::ChartConfig;
use crate::error::DashboardResult;

/// Contract implemented by any rendering capability.
///
/// A capability receives a fully materialized `ChartConfig` and takes
/// exclusive ownership of it, so adapter logic stays isolated from how a
/// backend draws, lays out, or serializes the chart.
pub trait ChartRenderer {
    fn bind(&mut self, mount: &MountPoint, config: ChartConfig) -> DashboardResult<()>;
}
