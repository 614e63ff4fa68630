//! Chart configuration
//!
//! Builds the configuration object handed to the page's charting library
//! for a `<canvas>`: labels and values (optionally read from the canvas's
//! `data-labels`/`data-values` attributes), per-kind colors, and the
//! default option tree merged with caller options. Nothing here draws.

mod options;
mod palette;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::dom::{Document, NodeId, Selector};

pub use options::{default_options, format_number, merge_options, tooltip_label};
pub use palette::{cycle_colors, with_alpha, ChartKind, ChartPalette};

/// Errors from building a chart configuration
#[derive(Debug)]
pub enum ChartError {
    /// No element with the given id
    CanvasNotFound(String),
    /// Data attributes present but not valid JSON of the right shape
    Data(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::CanvasNotFound(id) => write!(f, "No canvas with id '{}'", id),
            ChartError::Data(msg) => write!(f, "Error parsing chart data: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

/// Caller-supplied chart data. Data attributes on the canvas take
/// precedence over `labels` and `values`. Values are kept as JSON numbers
/// so integers are emitted as written.
#[derive(Debug, Clone, Default)]
pub struct ChartInput {
    pub labels: Vec<String>,
    pub values: Vec<Number>,
    pub background: Option<Vec<String>>,
    pub border: Option<Vec<String>>,
    pub options: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Number>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Complete configuration for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Map<String, Value>,
}

impl ChartSpec {
    /// Tooltip text for the data point at `index`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let dataset = self.data.datasets.first()?;
        let value = dataset.data.get(index)?.as_f64()?;
        let label = if self.kind.is_circular() {
            self.data.labels.get(index).cloned().unwrap_or_default()
        } else {
            dataset.label.clone().unwrap_or_default()
        };
        let total = dataset.data.iter().filter_map(Number::as_f64).sum();
        Some(tooltip_label(self.kind, &label, value, total))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the configuration for the canvas with id `canvas_id`
pub fn build_chart(
    doc: &Document,
    canvas_id: &str,
    kind: ChartKind,
    input: ChartInput,
    small_screen: bool,
    palette: &ChartPalette,
) -> Result<ChartSpec, ChartError> {
    let canvas = doc
        .by_id(canvas_id)
        .ok_or_else(|| ChartError::CanvasNotFound(canvas_id.to_string()))?;

    let ChartInput {
        mut labels,
        mut values,
        background,
        border,
        options,
    } = input;

    if let (Some(raw_labels), Some(raw_values)) =
        (doc.attr(canvas, "data-labels"), doc.attr(canvas, "data-values"))
    {
        labels = parse_labels(raw_labels)?;
        values = serde_json::from_str(raw_values).map_err(|e| ChartError::Data(e.to_string()))?;
    }

    let background = background.unwrap_or_else(|| palette.backgrounds(kind).to_vec());
    let border = border.unwrap_or_else(|| palette.borders.clone());
    let background_color = cycle_colors(&background, values.len());
    let border_color = cycle_colors(&border, values.len());

    let hover_background_color = (kind == ChartKind::Bar).then(|| {
        background_color
            .iter()
            .map(|c| with_alpha(c, 0.9))
            .collect()
    });
    let is_line = kind == ChartKind::Line;

    let dataset = Dataset {
        label: card_title(doc, canvas),
        data: values,
        background_color,
        border_color,
        border_width: 1,
        hover_background_color,
        tension: is_line.then_some(0.3),
        fill: is_line.then_some(true),
    };

    tracing::debug!(
        "Built {} chart '{}' with {} points",
        kind.as_str(),
        canvas_id,
        dataset.data.len()
    );

    Ok(ChartSpec {
        kind,
        data: ChartData {
            labels,
            datasets: vec![dataset],
        },
        options: merge_options(default_options(kind, small_screen), options.as_ref()),
    })
}

fn parse_labels(raw: &str) -> Result<Vec<String>, ChartError> {
    let labels: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| ChartError::Data(e.to_string()))?;
    Ok(labels
        .into_iter()
        .map(|label| match label {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

/// Header text of the card enclosing the canvas
fn card_title(doc: &Document, canvas: NodeId) -> Option<String> {
    let card = doc.closest(canvas, |d, n| d.has_class(n, "card"))?;
    let heading = doc.query(card, &Selector::parse(".card-header h5"))?;
    Some(doc.text_content(heading))
}
