use tracing::debug;

use crate::core::projection::{gdp_provinces, gdp_totals, price_periods, price_totals};
use crate::core::{ChartConfig, ChartKind, GdpRecord, PriceRecord, Series, StyleValue};
use crate::error::DashboardResult;
use crate::render::{ChartRenderer, MountPoint};

/// Name of the price-index series on the line chart.
pub const CPI_SERIES_NAME: &str = "CPI";

/// Name of the provincial series on the radar chart.
pub const GDP_REGION_SERIES_NAME: &str = "GDP Region";

/// Name of the provincial series on the bar chart.
pub const GDP_BAR_SERIES_NAME: &str = "GDP";

/// Fixed stroke width for the price line.
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Fixed curve tension for the price line.
pub const LINE_TENSION: f64 = 0.4;

/// Builds the CPI time-series line chart and binds it to `mount`.
///
/// Labels are the record periods in original order; the single series named
/// [`CPI_SERIES_NAME`] carries the index values in the same order. An empty
/// collection produces a config with empty labels and series.
pub fn build_price_line_chart<R: ChartRenderer>(
    renderer: &mut R,
    prices: &[PriceRecord],
    mount: &MountPoint,
) -> DashboardResult<()> {
    let config = ChartConfig::new(ChartKind::Line, price_periods(prices))
        .with_series(Series::named(CPI_SERIES_NAME, price_totals(prices)))
        .with_style("borderWidth", StyleValue::Number(LINE_STROKE_WIDTH))
        .with_style("tension", StyleValue::Number(LINE_TENSION));
    debug!(
        records = prices.len(),
        mount = mount.id(),
        "build price line chart"
    );
    renderer.bind(mount, config)
}

/// Builds the proportional GDP doughnut chart and binds it to `mount`.
///
/// The single series is unnamed and colors are left to the capability's
/// default categorical palette. Raw totals pass through unnormalized.
pub fn build_gdp_doughnut_chart<R: ChartRenderer>(
    renderer: &mut R,
    gdp: &[GdpRecord],
    mount: &MountPoint,
) -> DashboardResult<()> {
    let config = ChartConfig::new(ChartKind::Doughnut, gdp_provinces(gdp))
        .with_series(Series::unnamed(gdp_totals(gdp)));
    debug!(
        records = gdp.len(),
        mount = mount.id(),
        "build gdp doughnut chart"
    );
    renderer.bind(mount, config)
}

/// Builds the multi-axis GDP radar chart and binds it to `mount`.
///
/// Same projection as the doughnut builder; only the kind, the series name,
/// and minor style fields differ.
pub fn build_gdp_radar_chart<R: ChartRenderer>(
    renderer: &mut R,
    gdp: &[GdpRecord],
    mount: &MountPoint,
) -> DashboardResult<()> {
    let config = ChartConfig::new(ChartKind::Radar, gdp_provinces(gdp))
        .with_series(Series::named(GDP_REGION_SERIES_NAME, gdp_totals(gdp)))
        .with_style("fill", StyleValue::Flag(true));
    debug!(
        records = gdp.len(),
        mount = mount.id(),
        "build gdp radar chart"
    );
    renderer.bind(mount, config)
}

/// Builds a by-province GDP bar chart and binds it to `mount`.
///
/// Not part of the standard dashboard assembly.
pub fn build_gdp_bar_chart<R: ChartRenderer>(
    renderer: &mut R,
    gdp: &[GdpRecord],
    mount: &MountPoint,
) -> DashboardResult<()> {
    let config = ChartConfig::new(ChartKind::Bar, gdp_provinces(gdp))
        .with_series(Series::named(GDP_BAR_SERIES_NAME, gdp_totals(gdp)));
    debug!(records = gdp.len(), mount = mount.id(), "build gdp bar chart");
    renderer.bind(mount, config)
}
