//! Default chart option trees and tooltip formatting

use serde_json::{json, Map, Value};

use super::palette::ChartKind;

const FONT_FAMILY: &str = "'Segoe UI', 'Roboto', 'Helvetica Neue', sans-serif";

/// Default option tree for a chart kind
pub fn default_options(kind: ChartKind, small_screen: bool) -> Map<String, Value> {
    let legend_position = if small_screen {
        "bottom"
    } else if kind.is_circular() {
        "right"
    } else {
        "top"
    };

    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "animation": {
            "duration": 1200,
            "easing": "easeOutQuart"
        },
        "plugins": {
            "legend": {
                "display": true,
                "position": legend_position,
                "labels": {
                    "boxWidth": 15,
                    "padding": 15,
                    "usePointStyle": true,
                    "pointStyle": "circle",
                    "font": { "size": 12, "family": FONT_FAMILY }
                }
            },
            "tooltip": {
                "enabled": true,
                "backgroundColor": "rgba(33, 37, 41, 0.85)",
                "titleFont": { "size": 14, "weight": "bold", "family": FONT_FAMILY },
                "bodyFont": { "size": 13, "family": FONT_FAMILY },
                "padding": 12,
                "cornerRadius": 6,
                "displayColors": true,
                "borderColor": "rgba(255, 255, 255, 0.1)",
                "borderWidth": 1,
                "caretSize": 8,
                "caretPadding": 6,
                "animation": { "duration": 150 }
            }
        },
        "layout": {
            "padding": { "top": 15, "right": 25, "bottom": 15, "left": 15 }
        },
        "interaction": {
            "mode": "index",
            "intersect": false
        }
    });

    let Some(map) = options.as_object_mut() else {
        return Map::new();
    };

    match kind {
        ChartKind::Bar | ChartKind::Line => {
            map.insert("scales".to_string(), axis_scales(kind == ChartKind::Bar));
        }
        ChartKind::Pie | ChartKind::Doughnut => {
            let cutout = if kind == ChartKind::Doughnut { "70%" } else { "0" };
            map.insert("cutout".to_string(), json!(cutout));
            map.insert("radius".to_string(), json!("90%"));
        }
        ChartKind::Other => {}
    }

    let elements = match kind {
        ChartKind::Bar => Some(json!({
            "bar": {
                "borderRadius": 4,
                "borderSkipped": false,
                "hoverBorderWidth": 2
            }
        })),
        ChartKind::Line => Some(json!({
            "line": { "tension": 0.4, "borderWidth": 3, "fill": true },
            "point": {
                "radius": 4,
                "hoverRadius": 6,
                "backgroundColor": "white",
                "borderWidth": 3
            }
        })),
        ChartKind::Pie | ChartKind::Doughnut => Some(json!({
            "arc": {
                "borderWidth": 2,
                "borderColor": "white",
                "hoverBorderColor": "white",
                "hoverBorderWidth": 3,
                "hoverOffset": 8
            }
        })),
        ChartKind::Other => None,
    };
    if let Some(elements) = elements {
        map.insert("elements".to_string(), elements);
    }

    std::mem::take(map)
}

fn axis_scales(integer_ticks: bool) -> Value {
    let axis_font = json!({ "size": 11, "family": FONT_FAMILY });
    let mut y_ticks = json!({ "font": axis_font, "color": "rgba(0, 0, 0, 0.6)" });
    if integer_ticks {
        y_ticks["precision"] = json!(0);
    }
    json!({
        "y": {
            "beginAtZero": true,
            "grid": { "color": "rgba(0, 0, 0, 0.03)", "drawBorder": false },
            "border": { "dash": [4, 4] },
            "ticks": y_ticks
        },
        "x": {
            "grid": { "display": false, "drawBorder": false },
            "ticks": { "font": axis_font, "color": "rgba(0, 0, 0, 0.6)" }
        }
    })
}

/// Top-level merge: caller keys replace default keys wholesale
pub fn merge_options(
    mut defaults: Map<String, Value>,
    custom: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    if let Some(custom) = custom {
        for (key, value) in custom {
            defaults.insert(key.clone(), value.clone());
        }
    }
    defaults
}

/// Tooltip text for one data point. `total` is the sum of the dataset and
/// only matters for pie and doughnut charts.
pub fn tooltip_label(kind: ChartKind, label: &str, value: f64, total: f64) -> String {
    let formatted = format_number(value);
    if kind.is_circular() {
        let percentage = if total == 0.0 { 0.0 } else { value / total * 100.0 };
        return format!("{label}: {formatted} ({percentage:.1}%)");
    }
    if label.is_empty() {
        formatted
    } else {
        format!("{label}: {formatted}")
    }
}

/// Group thousands with commas, keeping at most three fraction digits
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let negative = value < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
