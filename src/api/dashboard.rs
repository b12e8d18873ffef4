use tracing::debug;

use crate::api::builders::{
    build_gdp_doughnut_chart, build_gdp_radar_chart, build_price_line_chart,
};
use crate::core::{GdpRecord, PriceRecord};
use crate::error::DashboardResult;
use crate::render::{ChartRenderer, MountPoint};

/// Mount-point assignment for the three standard dashboard panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMounts {
    pub price_line: MountPoint,
    pub gdp_doughnut: MountPoint,
    pub gdp_radar: MountPoint,
}

impl DashboardMounts {
    /// Element ids used by the stock dashboard page markup.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            price_line: MountPoint::from_static("cpiChart"),
            gdp_doughnut: MountPoint::from_static("gdpChart"),
            gdp_radar: MountPoint::from_static("gdpRadarChart"),
        }
    }
}

impl Default for DashboardMounts {
    fn default() -> Self {
        Self::standard()
    }
}

/// Owns a rendering capability and drives the three standard panels.
///
/// The panel constructions are independent projections with no shared
/// state; they run sequentially in one synchronous pass and the first
/// capability failure aborts the remainder.
pub struct Dashboard<R: ChartRenderer> {
    renderer: R,
    mounts: DashboardMounts,
}

impl<R: ChartRenderer> Dashboard<R> {
    #[must_use]
    pub fn new(renderer: R, mounts: DashboardMounts) -> Self {
        Self { renderer, mounts }
    }

    /// Builds the line, doughnut, and radar panels from the two collections.
    pub fn render(&mut self, prices: &[PriceRecord], gdp: &[GdpRecord]) -> DashboardResult<()> {
        build_price_line_chart(&mut self.renderer, prices, &self.mounts.price_line)?;
        build_gdp_doughnut_chart(&mut self.renderer, gdp, &self.mounts.gdp_doughnut)?;
        build_gdp_radar_chart(&mut self.renderer, gdp, &self.mounts.gdp_radar)?;
        debug!(
            prices = prices.len(),
            gdp = gdp.len(),
            "dashboard render complete"
        );
        Ok(())
    }

    #[must_use]
    pub fn mounts(&self) -> &DashboardMounts {
        &self.mounts
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Releases the capability, e.g. to finalize an emitted document.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
