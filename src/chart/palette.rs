//! Chart color palettes

use serde::{Deserialize, Serialize};

/// Chart type, as passed to the charting library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Doughnut,
    Bar,
    Line,
    #[serde(other)]
    Other,
}

impl ChartKind {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            _ => ChartKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Other => "other",
        }
    }

    /// Pie and doughnut charts: one color per slice, percentages in tooltips
    pub fn is_circular(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }

    /// Bar and line charts have axes
    pub fn has_axes(self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Line)
    }
}

/// Colors used for chart datasets, as CSS `rgba(...)` strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    /// Fallback backgrounds for chart kinds without their own list
    pub primary: Vec<String>,
    /// Borders for every chart kind
    pub borders: Vec<String>,
    pub pie: Vec<String>,
    pub bar: Vec<String>,
    pub line: Vec<String>,
}

const BASE_COLORS: [(u8, u8, u8); 10] = [
    (67, 97, 238),  // Primary blue
    (72, 149, 239), // Light blue
    (76, 201, 240), // Cyan
    (46, 204, 113), // Green
    (155, 89, 182), // Purple
    (241, 196, 15), // Yellow
    (231, 76, 60),  // Red
    (52, 73, 94),   // Dark blue
    (26, 188, 156), // Teal
    (243, 156, 18), // Orange
];

/// Blue, green, yellow, red, purple
const ACCENT_ORDER: [usize; 5] = [0, 3, 5, 6, 4];

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

impl Default for ChartPalette {
    fn default() -> Self {
        let accents = |alpha| {
            ACCENT_ORDER
                .iter()
                .map(|&i| rgba(BASE_COLORS[i], alpha))
                .collect()
        };
        Self {
            primary: BASE_COLORS.iter().map(|&c| rgba(c, 0.7)).collect(),
            borders: BASE_COLORS.iter().map(|&c| rgba(c, 1.0)).collect(),
            pie: BASE_COLORS[..5].iter().map(|&c| rgba(c, 0.85)).collect(),
            bar: accents(0.75),
            line: accents(0.5),
        }
    }
}

impl ChartPalette {
    /// Background colors for a chart kind
    pub fn backgrounds(&self, kind: ChartKind) -> &[String] {
        match kind {
            ChartKind::Pie | ChartKind::Doughnut => &self.pie,
            ChartKind::Bar => &self.bar,
            ChartKind::Line => &self.line,
            ChartKind::Other => &self.primary,
        }
    }
}

/// Repeat `colors` until there is one per data point
pub fn cycle_colors(colors: &[String], count: usize) -> Vec<String> {
    colors.iter().cycle().take(count).cloned().collect()
}

/// Replace the alpha channel of an `rgba(...)` color. Other color forms are
/// returned unchanged.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    let trimmed = color.trim();
    let Some(inner) = trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return color.to_string();
    };
    match inner.rsplit_once(',') {
        Some((channels, _)) => format!("rgba({}, {})", channels.trim(), alpha),
        None => color.to_string(),
    }
}
