//! Adapter layer: record collections in, bound chart instances out.

mod builders;
mod dashboard;

pub use builders::{
    CPI_SERIES_NAME, GDP_BAR_SERIES_NAME, GDP_REGION_SERIES_NAME, LINE_STROKE_WIDTH, LINE_TENSION,
    build_gdp_bar_chart, build_gdp_doughnut_chart, build_gdp_radar_chart, build_price_line_chart,
};
pub use dashboard::{Dashboard, DashboardMounts};
