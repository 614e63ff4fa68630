//! Page lifecycle and click routing

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::PageMsg;
use crate::model::DashboardModel;
use crate::widgets::tab_link_at;

use super::{update_toolbar, update_widget};
use crate::messages::{ToolbarMsg, WidgetMsg};

pub fn update_page(model: &mut DashboardModel, msg: PageMsg, host: &mut dyn Host) -> Option<Cmd> {
    match msg {
        PageMsg::Loaded => {
            model.binder.scan_document(&mut model.document);
            update_widget(model, WidgetMsg::Init, host)
        }
        PageMsg::RegionShown(region) => {
            model.binder.scan_region(&mut model.document, region);
            None
        }
        PageMsg::Click(node) => route_click(model, node, host),
    }
}

/// Send a click to whichever component owns the target
fn route_click(
    model: &mut DashboardModel,
    node: crate::dom::NodeId,
    host: &mut dyn Host,
) -> Option<Cmd> {
    let doc = &model.document;
    if model.binder.bindings().any(|b| doc.is_descendant_of(node, b.toolbar)) {
        return update_toolbar(model, ToolbarMsg::Click(node), host);
    }
    if model.widgets.expandable_at(doc, node).is_some() {
        return update_widget(model, WidgetMsg::ExpandClicked(node), host);
    }
    if model.widgets.is_notes_button(node) {
        return update_widget(model, WidgetMsg::NotesToggleClicked(node), host);
    }
    if tab_link_at(doc, node).is_some() {
        return update_widget(model, WidgetMsg::TabClicked(node), host);
    }
    None
}
