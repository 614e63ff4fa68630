//! Dashboard UI - Elm-style page controller
//!
//! This crate drives the interactive parts of a project dashboard page:
//! rich-text editing surfaces bound to form fields, page widgets, event
//! interception and chart configuration. The page is an in-memory
//! [`dom::Document`]; the embedding host feeds events in as [`Msg`]s and
//! performs the [`Cmd`]s that come back.

pub mod binder;
pub mod chart;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod editable;
pub mod host;
pub mod intercept;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod widgets;

// Re-export commonly used types
pub use binder::{BindingId, DispatchOutcome, RichTextBinder};
pub use commands::Cmd;
pub use config::AppConfig;
pub use dom::{Document, NodeId};
pub use host::{HeadlessHost, Host};
pub use messages::Msg;
pub use model::DashboardModel;
pub use update::update;
