use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{DashboardError, DashboardResult};

/// Supported chart kinds, serialized in the declarative engine's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Radar,
    Bar,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::Bar => "bar",
        }
    }
}

/// Scalar value of one style option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

/// Style options keyed by the engine's option names.
///
/// `IndexMap` preserves insertion order so serialized configs are stable.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A named or unnamed value sequence, index-aligned with the chart labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            values,
        }
    }

    #[must_use]
    pub fn unnamed(values: Vec<f64>) -> Self {
        Self { name: None, values }
    }
}

/// Declarative description of one chart: kind, labels, series, style.
///
/// Built fresh per chart and moved into the rendering capability on bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub style: StyleMap,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            labels,
            series: Vec::new(),
            style: StyleMap::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_style(mut self, option: impl Into<String>, value: StyleValue) -> Self {
        self.style.insert(option.into(), value);
        self
    }

    /// Checks the label/series alignment invariant.
    ///
    /// Index `i` of `labels` and of every series must describe the same
    /// underlying record, so unequal lengths are rejected outright instead
    /// of being left to the engine's truncation behavior.
    pub fn validate(&self) -> DashboardResult<()> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(DashboardError::InvalidData(
                    "chart label must not be empty".to_owned(),
                ));
            }
        }

        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(DashboardError::InvalidData(format!(
                    "series length {} does not match label count {}",
                    series.values.len(),
                    self.labels.len()
                )));
            }
            if series.values.iter().any(|value| !value.is_finite()) {
                return Err(DashboardError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// Lowers the config into the engine's `type`/`data`/`datasets` shape.
    ///
    /// Style options are inlined into every dataset object, matching how
    /// the declarative engine expects per-dataset styling.
    #[must_use]
    pub fn to_engine_value(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                let mut dataset = serde_json::Map::new();
                if let Some(name) = &series.name {
                    dataset.insert("label".to_owned(), json!(name));
                }
                dataset.insert("data".to_owned(), json!(series.values));
                for (option, value) in &self.style {
                    dataset.insert(option.clone(), json!(value));
                }
                Value::Object(dataset)
            })
            .collect();

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            }
        })
    }
}
