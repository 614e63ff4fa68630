//! Rich-text field binder
//!
//! Turns plain source fields into rich-text widgets. For each qualifying
//! field the binder builds a toolbar, an editable surface and a character
//! counter, inserts them after the field and hides the field. From then on
//! the surface is the source of truth: every edit, command and blur writes
//! the surface markup back into the field's value.
//!
//! ```text
//! textarea.value ──bind──▶ surface ──edit / command / blur──▶ textarea.value
//! ```
//!
//! A field is bound at most once. Fields inside deferred-render regions
//! are skipped at startup and picked up by [`RichTextBinder::scan_region`]
//! when the region is shown.

mod binding;
mod discovery;
mod registry;
mod toolbar;

pub use binding::{Binding, BindingId, ToggleState, ToolbarButton};
pub use discovery::{
    has_qualifying_role, in_deferred_region, is_deferred_region, region_fields, startup_fields,
};
pub use registry::Registry;
pub use toolbar::build_toolbar;

use crate::config::BinderConfig;
use crate::dom::{Document, Element, NodeId, Selector};
use crate::editable::{
    self, text_length, DomFormatter, FormatCommand, FormattingPrimitive, Selection,
};
use crate::host::Host;
use crate::keymap::{Keymap, Keystroke};

/// Result of a command dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The primitive changed the surface
    Applied,
    /// Nothing to do (no selection, cancelled prompt, nothing matched)
    NoOp,
    /// Refused before touching the surface; the user was told why
    Rejected,
}

/// Binds source fields to rich-text surfaces and drives them
#[derive(Debug)]
pub struct RichTextBinder<F = DomFormatter> {
    config: BinderConfig,
    keymap: Keymap,
    formatter: F,
    registry: Registry,
}

impl RichTextBinder<DomFormatter> {
    pub fn new(config: BinderConfig, keymap: Keymap) -> Self {
        Self::with_formatter(config, keymap, DomFormatter)
    }
}

impl<F: FormattingPrimitive> RichTextBinder<F> {
    pub fn with_formatter(config: BinderConfig, keymap: Keymap, formatter: F) -> Self {
        Self {
            config,
            keymap,
            formatter,
            registry: Registry::new(),
        }
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn binding(&self, id: BindingId) -> Option<&Binding> {
        self.registry.get(id)
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.registry.iter()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn binding_for_field(&self, field: NodeId) -> Option<BindingId> {
        self.registry.for_field(field)
    }

    /// Binding whose surface is or contains `node`
    pub fn binding_for_surface(&self, doc: &Document, node: NodeId) -> Option<BindingId> {
        self.registry.for_surface_node(doc, node)
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// Bind every qualifying field outside deferred regions
    pub fn scan_document(&mut self, doc: &mut Document) -> Vec<BindingId> {
        let fields = startup_fields(doc, &self.config);
        let bound: Vec<BindingId> = fields
            .into_iter()
            .filter_map(|field| self.bind(doc, field))
            .collect();
        tracing::info!("Startup scan bound {} rich-text field(s)", bound.len());
        bound
    }

    /// Bind every qualifying field inside a region that was just shown
    pub fn scan_region(&mut self, doc: &mut Document, region: NodeId) -> Vec<BindingId> {
        let fields = region_fields(doc, region, &self.config);
        if fields.is_empty() {
            return Vec::new();
        }
        let bound: Vec<BindingId> = fields
            .into_iter()
            .filter_map(|field| self.bind(doc, field))
            .collect();
        tracing::debug!("Region scan bound {} field(s)", bound.len());
        bound
    }

    /// Build the widget for `field`. Returns `None` if it is already bound.
    pub fn bind(&mut self, doc: &mut Document, field: NodeId) -> Option<BindingId> {
        let id = self.registry.reserve(field)?;

        let container = doc.create_element_from(
            Element::new("div").with_attr("class", "rich-text-editor-container"),
        );
        let (toolbar, buttons) = build_toolbar(doc, &self.keymap);

        let surface = doc.create_element_from(
            Element::new("div")
                .with_attr("class", "rich-text-editor")
                .with_attr("contenteditable", "true")
                .with_attr("placeholder", &self.config.placeholder),
        );
        let initial = doc.value(field).unwrap_or_default().to_string();
        doc.set_inner_html(surface, &initial);

        let counter_box =
            doc.create_element_from(Element::new("div").with_attr("class", "editor-counter"));
        let counter = doc.create_element("span");
        doc.append_child(counter_box, counter);

        doc.set_style_property(field, "display", "none");
        let label = doc
            .closest(field, |d, n| d.has_class(n, "form-floating"))
            .and_then(|wrapper| {
                let field_id = doc.attr(field, "id")?;
                doc.query(wrapper, &Selector::tag_with_attr("label", "for", field_id))
            });
        if let Some(label) = label {
            doc.set_style_property(label, "display", "none");
        }

        doc.append_child(container, toolbar);
        doc.append_child(container, surface);
        doc.append_child(container, counter_box);
        doc.insert_after(field, container);

        self.registry.fill(Binding {
            id,
            source_field: field,
            container,
            toolbar,
            surface,
            counter,
            buttons,
            selection: None,
            focused: false,
            toggles: ToggleState::default(),
            character_count: 0,
        });

        self.update_counter(doc, id);
        self.refresh_toggles(doc, id);

        tracing::info!(
            "Bound rich-text field {:?} (name={})",
            id,
            doc.attr(field, "name").unwrap_or("")
        );
        Some(id)
    }

    // =========================================================================
    // Sync
    // =========================================================================

    /// Write the surface markup into the source field and refresh the counter
    pub fn sync(&mut self, doc: &mut Document, id: BindingId) {
        let Some(binding) = self.registry.get(id) else {
            return;
        };
        let html = doc.inner_html(binding.surface);
        doc.set_value(binding.source_field, &html);
        self.update_counter(doc, id);
        tracing::debug!("Synced {:?} ({} bytes)", id, html.len());
    }

    fn update_counter(&mut self, doc: &mut Document, id: BindingId) {
        let Some(binding) = self.registry.get_mut(id) else {
            return;
        };
        binding.character_count = doc.text_content(binding.surface).chars().count();
        doc.set_text_content(
            binding.counter,
            &format!("{} characters", binding.character_count),
        );
    }

    /// Recompute toggle state at the current selection and mirror it on
    /// the toolbar buttons
    pub fn refresh_toggles(&mut self, doc: &mut Document, id: BindingId) {
        let Some(binding) = self.registry.get_mut(id) else {
            return;
        };

        let mut toggles = ToggleState::default();
        if let Some(selection) = binding.selection {
            let selection = selection.clamped(text_length(doc, binding.surface));
            for command in FormatCommand::TOGGLES {
                let active = self
                    .formatter
                    .query_state(doc, binding.surface, selection, command);
                toggles.set(command, active);
            }
        }
        binding.toggles = toggles;

        for button in binding.buttons.iter().filter(|b| b.command.is_toggle()) {
            if toggles.get(button.command) {
                doc.add_class(button.node, "active");
            } else {
                doc.remove_class(button.node, "active");
            }
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Run a formatting command on a binding's surface, then sync and
    /// refresh toggles
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        host: &mut dyn Host,
        id: BindingId,
        command: FormatCommand,
    ) -> DispatchOutcome {
        let Some(binding) = self.registry.get(id) else {
            return DispatchOutcome::NoOp;
        };
        let surface = binding.surface;
        let active = binding.is_active();
        let selection = binding
            .selection
            .map(|s| s.clamped(text_length(doc, surface)));

        let mut url = None;
        if command == FormatCommand::CreateLink {
            if selection.map_or(true, |s| s.is_empty()) {
                tracing::debug!("createLink on {:?} rejected: nothing selected", id);
                host.alert(&self.config.link_rejection);
                return DispatchOutcome::Rejected;
            }
            url = host
                .prompt(&self.config.link_prompt, &self.config.link_placeholder)
                .filter(|answer| !answer.is_empty() && *answer != self.config.link_placeholder);
            if url.is_none() {
                tracing::debug!("createLink on {:?} cancelled", id);
            }
        }

        let applied = match selection {
            Some(selection) if active => {
                if command == FormatCommand::CreateLink && url.is_none() {
                    false
                } else {
                    self.formatter
                        .execute(doc, surface, selection, command, url.as_deref())
                }
            }
            _ => false,
        };
        tracing::debug!("Dispatched {} on {:?}: applied={}", command, id, applied);

        self.sync(doc, id);
        self.focus(doc, id);

        if applied {
            DispatchOutcome::Applied
        } else {
            DispatchOutcome::NoOp
        }
    }

    /// Dispatch the command of the toolbar button at (or containing) `node`
    pub fn click_button(
        &mut self,
        doc: &mut Document,
        host: &mut dyn Host,
        node: NodeId,
    ) -> Option<DispatchOutcome> {
        let (id, button) = self.registry.for_button(doc, node)?;
        let command = self.registry.get(id)?.command_for(button)?;
        Some(self.dispatch(doc, host, id, command))
    }

    /// Handle an accelerator. Returns `true` when the keystroke was bound,
    /// in which case the host must suppress its default action.
    pub fn key_down(
        &mut self,
        doc: &mut Document,
        host: &mut dyn Host,
        id: BindingId,
        keystroke: &Keystroke,
    ) -> bool {
        let Some(command) = self.keymap.lookup(keystroke) else {
            return false;
        };
        tracing::debug!("{} -> {}", keystroke.display_string(), command);
        self.dispatch(doc, host, id, command);
        true
    }

    // =========================================================================
    // Surface events
    // =========================================================================

    /// Surface gained focus. A surface without a selection gets a caret at
    /// the end of its text.
    pub fn focus(&mut self, doc: &mut Document, id: BindingId) {
        let Some(binding) = self.registry.get_mut(id) else {
            return;
        };
        binding.focused = true;
        if binding.selection.is_none() {
            binding.selection = Some(Selection::collapsed(text_length(doc, binding.surface)));
        }
        self.refresh_toggles(doc, id);
    }

    /// Surface lost focus: sync. The selection is kept for toolbar clicks.
    pub fn blur(&mut self, doc: &mut Document, id: BindingId) {
        if let Some(binding) = self.registry.get_mut(id) {
            binding.focused = false;
        }
        self.sync(doc, id);
    }

    /// The selection inside the surface changed
    pub fn select(&mut self, doc: &mut Document, id: BindingId, selection: Selection) {
        let Some(binding) = self.registry.get_mut(id) else {
            return;
        };
        binding.selection = Some(selection.clamped(text_length(doc, binding.surface)));
        self.refresh_toggles(doc, id);
    }

    pub fn pointer_up(&mut self, doc: &mut Document, id: BindingId) {
        self.refresh_toggles(doc, id);
    }

    pub fn key_up(&mut self, doc: &mut Document, id: BindingId) {
        self.refresh_toggles(doc, id);
    }

    /// Type `text` at the selection, replacing it
    pub fn insert_text(&mut self, doc: &mut Document, id: BindingId, text: &str) {
        self.edit(doc, id, |doc, surface, selection| {
            editable::insert_text(doc, surface, selection, text)
        });
    }

    pub fn delete_backward(&mut self, doc: &mut Document, id: BindingId) {
        self.edit(doc, id, editable::delete_backward);
    }

    pub fn delete_forward(&mut self, doc: &mut Document, id: BindingId) {
        self.edit(doc, id, editable::delete_forward);
    }

    fn edit<E>(&mut self, doc: &mut Document, id: BindingId, op: E)
    where
        E: FnOnce(&mut Document, NodeId, Selection) -> Selection,
    {
        let Some(binding) = self.registry.get_mut(id) else {
            return;
        };
        let len = text_length(doc, binding.surface);
        let selection = binding
            .selection
            .map(|s| s.clamped(len))
            .unwrap_or(Selection::collapsed(len));
        binding.selection = Some(op(doc, binding.surface, selection));
        binding.focused = true;

        self.sync(doc, id);
        self.refresh_toggles(doc, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use crate::keymap::{default_bindings, KeyCode, Modifiers};

    fn setup(html: &str) -> (Document, RichTextBinder, BindingId) {
        let mut doc = Document::parse(html);
        let mut binder = RichTextBinder::new(
            BinderConfig::default(),
            Keymap::with_bindings(default_bindings()),
        );
        let ids = binder.scan_document(&mut doc);
        assert_eq!(ids.len(), 1);
        (doc, binder, ids[0])
    }

    #[test]
    fn test_bind_builds_widget_after_field() {
        let (doc, binder, id) =
            setup("<form><textarea name=\"notes\">&lt;p&gt;hi&lt;/p&gt;</textarea><button>Save</button></form>");
        let binding = binder.binding(id).unwrap();

        assert_eq!(doc.next_sibling(binding.source_field), Some(binding.container));
        assert_eq!(
            doc.children(binding.container),
            &[binding.toolbar, binding.surface, doc.parent(binding.counter).unwrap()]
        );
        assert_eq!(doc.inner_html(binding.surface), "<p>hi</p>");
        assert_eq!(doc.value(binding.source_field), Some("<p>hi</p>"));
        assert_eq!(doc.attr(binding.source_field, "style"), Some("display: none;"));
        assert_eq!(doc.text_content(binding.counter), "2 characters");
        assert_eq!(doc.attr(binding.surface, "placeholder"), Some("Enter your text here..."));
    }

    #[test]
    fn test_form_floating_label_hidden() {
        let (doc, _, _) = setup(
            "<div class=\"form-floating\"><textarea name=\"notes\" id=\"n\"></textarea><label for=\"n\">Notes</label><label for=\"x\">Other</label></div>",
        );
        let labels = doc.query_all(doc.root(), &Selector::parse("label"));
        assert_eq!(doc.attr(labels[0], "style"), Some("display: none;"));
        assert_eq!(doc.attr(labels[1], "style"), None);
    }

    #[test]
    fn test_bind_twice_is_noop() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\"></textarea>");
        let field = binder.binding(id).unwrap().source_field;
        assert_eq!(binder.bind(&mut doc, field), None);
        assert!(binder.scan_document(&mut doc).is_empty());
        assert_eq!(binder.len(), 1);
    }

    #[test]
    fn test_dispatch_without_selection_is_noop() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">plain</textarea>");
        let mut host = HeadlessHost::default();
        let outcome = binder.dispatch(&mut doc, &mut host, id, FormatCommand::Bold);
        assert_eq!(outcome, DispatchOutcome::NoOp);
        let binding = binder.binding(id).unwrap();
        assert_eq!(doc.value(binding.source_field), Some("plain"));
        assert!(binding.focused);
    }

    #[test]
    fn test_link_rejected_without_selection() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">plain</textarea>");
        let mut host = HeadlessHost::default();
        binder.focus(&mut doc, id);
        let outcome = binder.dispatch(&mut doc, &mut host, id, FormatCommand::CreateLink);
        assert_eq!(outcome, DispatchOutcome::Rejected);
        assert_eq!(
            host.alerts,
            vec!["Please select the text you want to convert to a link first."]
        );
    }

    #[test]
    fn test_link_prompt_cancelled() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">plain</textarea>");
        let mut host = HeadlessHost::default();
        binder.focus(&mut doc, id);
        binder.select(&mut doc, id, Selection::new(0, 5));
        let outcome = binder.dispatch(&mut doc, &mut host, id, FormatCommand::CreateLink);
        assert_eq!(outcome, DispatchOutcome::NoOp);
        assert!(host.alerts.is_empty());
        let binding = binder.binding(id).unwrap();
        assert_eq!(doc.inner_html(binding.surface), "plain");
    }

    #[test]
    fn test_accelerator_dispatches_and_marks_button() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">plain</textarea>");
        let mut host = HeadlessHost::default();
        binder.focus(&mut doc, id);
        binder.select(&mut doc, id, Selection::new(0, 5));

        let ctrl_b = Keystroke::new(KeyCode::Char('b'), Modifiers::CTRL);
        assert!(binder.key_down(&mut doc, &mut host, id, &ctrl_b));
        assert!(!binder.key_down(&mut doc, &mut host, id, &Keystroke::key(KeyCode::Char('b'))));

        let binding = binder.binding(id).unwrap();
        assert_eq!(doc.value(binding.source_field), Some("<b>plain</b>"));
        assert!(binding.toggles.bold);
        let bold = binding.button_for(FormatCommand::Bold).unwrap();
        assert!(doc.has_class(bold, "active"));
    }

    #[test]
    fn test_click_button_icon() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">plain</textarea>");
        let mut host = HeadlessHost::default();
        binder.focus(&mut doc, id);
        binder.select(&mut doc, id, Selection::new(0, 5));

        let italic = binder.binding(id).unwrap().button_for(FormatCommand::Italic).unwrap();
        let icon = doc.first_child(italic).unwrap();
        assert_eq!(
            binder.click_button(&mut doc, &mut host, icon),
            Some(DispatchOutcome::Applied)
        );
        let surface = binder.binding(id).unwrap().surface;
        assert_eq!(doc.inner_html(surface), "<i>plain</i>");
        assert_eq!(binder.click_button(&mut doc, &mut host, surface), None);
    }

    #[test]
    fn test_blur_syncs_and_keeps_selection() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\">abc</textarea>");
        binder.focus(&mut doc, id);
        binder.select(&mut doc, id, Selection::new(1, 2));
        binder.blur(&mut doc, id);
        let binding = binder.binding(id).unwrap();
        assert!(!binding.focused);
        assert_eq!(binding.selection, Some(Selection::new(1, 2)));
    }

    #[test]
    fn test_typing_syncs_counter() {
        let (mut doc, mut binder, id) = setup("<textarea name=\"notes\"></textarea>");
        binder.focus(&mut doc, id);
        binder.insert_text(&mut doc, id, "héllo");
        let binding = binder.binding(id).unwrap();
        assert_eq!(binding.character_count, 5);
        assert_eq!(doc.value(binding.source_field), Some("héllo"));
        assert_eq!(binding.selection, Some(Selection::collapsed(5)));

        binder.delete_forward(&mut doc, id);
        binder.delete_backward(&mut doc, id);
        let binding = binder.binding(id).unwrap();
        assert_eq!(doc.value(binding.source_field), Some("héll"));
        assert_eq!(doc.text_content(binding.counter), "4 characters");
    }
}
