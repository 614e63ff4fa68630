//! Toolbar button clicks

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::ToolbarMsg;
use crate::model::DashboardModel;

pub fn update_toolbar(
    model: &mut DashboardModel,
    msg: ToolbarMsg,
    host: &mut dyn Host,
) -> Option<Cmd> {
    match msg {
        ToolbarMsg::Click(node) => {
            let outcome = model
                .binder
                .click_button(&mut model.document, host, node)?;
            tracing::debug!("Toolbar click: {:?}", outcome);
            Some(Cmd::PreventDefault)
        }
    }
}
