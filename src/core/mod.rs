pub mod config;
pub mod projection;
pub mod types;

pub use config::{ChartConfig, ChartKind, Series, StyleMap, StyleValue};
pub use types::{GdpRecord, PriceRecord};
