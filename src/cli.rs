//! Command-line argument parsing for the page driver
//!
//! Supports:
//! - Binding the rich-text fields of a saved page and printing the result
//! - Revealing deferred regions by id before printing
//! - Building a chart configuration for a canvas on the page
//! - Listing the active keyboard accelerators

use clap::{Parser, Subcommand};
use dashboard_ui::chart::ChartKind;
use std::path::PathBuf;

/// Drive a dashboard page headlessly
#[derive(Parser, Debug)]
#[command(
    name = "dashboard-ui",
    version,
    about = "Bind rich-text fields and widgets on a dashboard page"
)]
pub struct CliArgs {
    /// Config file (defaults to config.yaml in the user config dir)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Keymap override file
    #[arg(long, value_name = "FILE", global = true)]
    pub keymap: Option<PathBuf>,

    /// Only log to stderr
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Load a page, bind its fields and print the resulting markup
    Bind {
        /// HTML page to load
        page: PathBuf,

        /// Reveal the deferred region with this id (repeatable)
        #[arg(long = "show", value_name = "ID")]
        show: Vec<String>,

        /// Print `name=value` for every bound field instead of the page
        #[arg(long)]
        values: bool,
    },
    /// Print the chart configuration for a canvas as JSON
    Chart {
        /// HTML page to load
        page: PathBuf,

        /// Id of the canvas element
        canvas: String,

        /// pie, doughnut, bar or line
        #[arg(long, default_value = "bar")]
        kind: String,

        /// Use the small-screen layout
        #[arg(long)]
        small_screen: bool,
    },
    /// List keyboard accelerators
    Keymap,
}

/// What to do, validated from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Bind {
        page: PathBuf,
        regions: Vec<String>,
        print_values: bool,
    },
    Chart {
        page: PathBuf,
        canvas: String,
        kind: ChartKind,
        small_screen: bool,
    },
    Keymap,
}

/// Settings derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub task: Task,
    pub config_path: Option<PathBuf>,
    pub keymap_path: Option<PathBuf>,
    pub file_logging: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let task = match self.command {
            CliCommand::Bind { page, show, values } => {
                let mut regions: Vec<String> = Vec::with_capacity(show.len());
                for id in show {
                    if id.is_empty() {
                        return Err("Region id must not be empty".to_string());
                    }
                    if !regions.contains(&id) {
                        regions.push(id);
                    }
                }
                Task::Bind {
                    page,
                    regions,
                    print_values: values,
                }
            }
            CliCommand::Chart {
                page,
                canvas,
                kind,
                small_screen,
            } => {
                let parsed = ChartKind::parse(&kind);
                if parsed == ChartKind::Other {
                    return Err(format!("Unknown chart type: {}", kind));
                }
                Task::Chart {
                    page,
                    canvas,
                    kind: parsed,
                    small_screen,
                }
            }
            CliCommand::Keymap => Task::Keymap,
        };

        Ok(RunConfig {
            task,
            config_path: self.config,
            keymap_path: self.keymap,
            file_logging: !self.no_log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: CliCommand) -> CliArgs {
        CliArgs {
            config: None,
            keymap: None,
            no_log_file: false,
            command,
        }
    }

    #[test]
    fn test_bind_dedupes_regions() {
        let config = args(CliCommand::Bind {
            page: PathBuf::from("page.html"),
            show: vec!["edit-modal".into(), "tab-2".into(), "edit-modal".into()],
            values: false,
        })
        .into_config()
        .unwrap();

        assert_eq!(
            config.task,
            Task::Bind {
                page: PathBuf::from("page.html"),
                regions: vec!["edit-modal".into(), "tab-2".into()],
                print_values: false,
            }
        );
    }

    #[test]
    fn test_empty_region_id_rejected() {
        let result = args(CliCommand::Bind {
            page: PathBuf::from("page.html"),
            show: vec![String::new()],
            values: true,
        })
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_chart_kind_parsed() {
        let config = args(CliCommand::Chart {
            page: PathBuf::from("page.html"),
            canvas: "statusChart".into(),
            kind: "Doughnut".into(),
            small_screen: true,
        })
        .into_config()
        .unwrap();

        match config.task {
            Task::Chart { kind, small_screen, .. } => {
                assert_eq!(kind, ChartKind::Doughnut);
                assert!(small_screen);
            }
            other => panic!("Expected chart task, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_chart_kind() {
        let err = args(CliCommand::Chart {
            page: PathBuf::from("page.html"),
            canvas: "c".into(),
            kind: "radar".into(),
            small_screen: false,
        })
        .into_config()
        .unwrap_err();
        assert!(err.contains("radar"));
    }

    #[test]
    fn test_no_log_file_flag() {
        let mut cli = args(CliCommand::Keymap);
        cli.no_log_file = true;
        cli.keymap = Some(PathBuf::from("keys.yaml"));
        let config = cli.into_config().unwrap();
        assert!(!config.file_logging);
        assert_eq!(config.keymap_path, Some(PathBuf::from("keys.yaml")));
        assert_eq!(config.task, Task::Keymap);
    }

    #[test]
    fn test_parse_from_argv() {
        let cli = CliArgs::parse_from([
            "dashboard-ui",
            "bind",
            "page.html",
            "--show",
            "modal",
            "--values",
        ]);
        let config = cli.into_config().unwrap();
        assert!(matches!(
            config.task,
            Task::Bind { print_values: true, ref regions, .. } if regions == &["modal".to_string()]
        ));
    }
}
