//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each call runs
//! to completion: any mutation of a surface is synced into its source
//! field before `update` returns.

mod editor;
mod host_event;
mod page;
mod toolbar;
mod widget;

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::DashboardModel;

#[cfg(debug_assertions)]
use crate::tracing::BindingSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use host_event::update_host;
pub use page::update_page;
pub use toolbar::update_toolbar;
pub use widget::update_widget;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DashboardModel, msg: Msg, host: &mut dyn Host) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg, host)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg, host)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DashboardModel, msg: Msg, host: &mut dyn Host) -> Option<Cmd> {
    match msg {
        Msg::Page(m) => page::update_page(model, m, host),
        Msg::Editor(m) => editor::update_editor(model, m, host),
        Msg::Toolbar(m) => toolbar::update_toolbar(model, m, host),
        Msg::Widget(m) => widget::update_widget(model, m, host),
        Msg::Host(m) => host_event::update_host(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures binding state before and after the update and logs the diffs.
/// Hover events are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut DashboardModel, msg: Msg, host: &mut dyn Host) -> Option<Cmd> {
    use crate::messages::HostMsg;

    let is_noisy = matches!(&msg, Msg::Host(HostMsg::Hover { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before: Vec<_> = model
        .binder
        .bindings()
        .map(|b| (b.id, BindingSnapshot::from_binding(b)))
        .collect();

    let result = update_inner(model, msg, host);

    for binding in model.binder.bindings() {
        let after = BindingSnapshot::from_binding(binding);
        match before.iter().find(|(id, _)| *id == binding.id) {
            Some((_, snapshot)) => {
                if let Some(diff) = snapshot.diff(&after) {
                    debug!(target: "binding", id = binding.id.0, %diff, "state changed");
                }
            }
            None => debug!(target: "binding", id = binding.id.0, "bound"),
        }
    }

    if let Some(ref cmd) = result {
        debug!(target: "message", ?cmd, "command");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Page::Loaded`
/// - `Editor::Focus(NodeId(12))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Page(m) => format!("Page::{:?}", m),
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Toolbar(m) => format!("Toolbar::{:?}", m),
        Msg::Widget(m) => format!("Widget::{:?}", m),
        Msg::Host(m) => format!("Host::{:?}", m),
    }
}
