//! Page widget messages

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::WidgetMsg;
use crate::model::DashboardModel;
use crate::widgets::{click_tab, tab_link_at};

pub fn update_widget(
    model: &mut DashboardModel,
    msg: WidgetMsg,
    host: &mut dyn Host,
) -> Option<Cmd> {
    let doc = &mut model.document;
    match msg {
        WidgetMsg::Init => {
            model.widgets.init(doc, host, &model.config.widgets);
            None
        }
        WidgetMsg::ExpandClicked(node) => {
            model.widgets.click_expand(doc, node, &model.config.widgets)
        }
        WidgetMsg::TabClicked(node) => {
            let link = tab_link_at(doc, node)?;
            click_tab(doc, link)
        }
        WidgetMsg::NotesToggleClicked(node) => {
            model.widgets.click_notes(doc, node);
            None
        }
    }
}
