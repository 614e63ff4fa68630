//! Logging setup and state snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,binding=debug` - scoped filtering
//! - `RUST_LOG=dashboard_ui::binder=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dashboard-ui/logs/dashboard-ui.log` with
//! daily rotation. File logging uses debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::binder::Binding;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Pass `file_logging =
/// false` to skip the rolling log file.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, "dashboard-ui.log");
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Snapshot of a binding's interactive state, for diffing across updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSnapshot {
    pub selection: Option<(usize, usize)>,
    pub focused: bool,
    pub active: Vec<&'static str>,
    pub character_count: usize,
}

impl BindingSnapshot {
    pub fn from_binding(binding: &Binding) -> Self {
        let toggles = binding.toggles;
        let active = [
            (toggles.bold, "bold"),
            (toggles.italic, "italic"),
            (toggles.underline, "underline"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        Self {
            selection: binding.selection.map(|s| (s.anchor, s.head)),
            focused: binding.focused,
            active,
            character_count: binding.character_count,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &BindingSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.selection != other.selection {
            changes.push(format!("selection: {:?} → {:?}", self.selection, other.selection));
        }
        if self.focused != other.focused {
            let status = if other.focused { "focused" } else { "blurred" };
            changes.push(status.to_string());
        }
        if self.active != other.active {
            changes.push(format!("active: [{}]", other.active.join(", ")));
        }
        if self.character_count != other.character_count {
            changes.push(format!(
                "characters: {} → {}",
                self.character_count, other.character_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
