//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use dashboard_ui::binder::Binding;
use dashboard_ui::dom::{Document, NodeId};
use dashboard_ui::editable::{FormatCommand, Selection};
use dashboard_ui::host::{Extent, Host};
use dashboard_ui::keymap::{default_bindings, Keymap};
use dashboard_ui::messages::{EditorMsg, Msg, PageMsg, ToolbarMsg};
use dashboard_ui::{update, AppConfig, BindingId, Cmd, DashboardModel};

/// Host with scripted prompt answers and element sizes keyed by `id`
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub answers: VecDeque<Option<String>>,
    pub extents: HashMap<String, Extent>,
    pub small_screen: bool,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next prompt (`None` cancels)
    pub fn answer(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(str::to_string));
        self
    }

    /// Report `scroll_height` / `client_height` for the element with `id`
    pub fn with_extent(mut self, id: &str, scroll_height: u32, client_height: u32) -> Self {
        self.extents.insert(
            id.to_string(),
            Extent {
                scroll_height,
                client_height,
            },
        );
        self
    }
}

impl Host for ScriptedHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn prompt(&mut self, message: &str, _default: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.answers.pop_front().flatten()
    }

    fn measure(&self, doc: &Document, node: NodeId) -> Option<Extent> {
        let id = doc.attr(node, "id")?;
        self.extents.get(id).copied()
    }

    fn is_small_screen(&self) -> bool {
        self.small_screen
    }
}

/// A notes field with `html` as its value, escaped the way a server
/// renders textarea content
pub fn notes_page(html: &str) -> String {
    let escaped = html.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
    format!(
        "<form id=\"update-form\"><textarea name=\"notes\" id=\"notes\">{escaped}</textarea>\
         <button type=\"submit\">Save</button></form>"
    )
}

/// Build a model for `html` with the embedded default keymap
pub fn test_model(html: &str) -> DashboardModel {
    DashboardModel::from_html(
        html,
        AppConfig::default(),
        Keymap::with_bindings(default_bindings()),
    )
}

/// Model with the page loaded and widgets initialized
pub fn loaded_model(html: &str, host: &mut ScriptedHost) -> DashboardModel {
    let mut model = test_model(html);
    update(&mut model, Msg::Page(PageMsg::Loaded), host);
    model
}

pub fn first_binding(model: &DashboardModel) -> &Binding {
    model
        .binder
        .bindings()
        .next()
        .expect("page should have a bound field")
}

pub fn first_id(model: &DashboardModel) -> BindingId {
    first_binding(model).id
}

pub fn field_value(model: &DashboardModel) -> String {
    let binding = first_binding(model);
    model
        .document
        .value(binding.source_field)
        .unwrap_or_default()
        .to_string()
}

pub fn surface_html(model: &DashboardModel) -> String {
    model.document.inner_html(first_binding(model).surface)
}

pub fn counter_text(model: &DashboardModel) -> String {
    model.document.text_content(first_binding(model).counter)
}

/// Focus the first surface and set its selection
pub fn focus_and_select(model: &mut DashboardModel, host: &mut ScriptedHost, selection: Selection) {
    let surface = first_binding(model).surface;
    update(model, Msg::Editor(EditorMsg::Focus(surface)), host);
    update(
        model,
        Msg::Editor(EditorMsg::Select {
            node: surface,
            selection,
        }),
        host,
    );
}

/// Click the toolbar button for `command` on the first binding
pub fn click(
    model: &mut DashboardModel,
    host: &mut ScriptedHost,
    command: FormatCommand,
) -> Option<Cmd> {
    let button = first_binding(model)
        .button_for(command)
        .expect("toolbar should have a button for the command");
    update(model, Msg::Toolbar(ToolbarMsg::Click(button)), host)
}

pub fn is_button_active(model: &DashboardModel, command: FormatCommand) -> bool {
    let button = first_binding(model)
        .button_for(command)
        .expect("toolbar should have a button for the command");
    model.document.has_class(button, "active")
}
