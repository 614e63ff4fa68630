//! Raw host events, run through the interceptor chain

use crate::commands::Cmd;
use crate::intercept::Verdict;
use crate::messages::HostMsg;
use crate::model::DashboardModel;

pub fn update_host(model: &mut DashboardModel, msg: HostMsg) -> Option<Cmd> {
    match model.interceptors.inspect(&model.document, &msg) {
        Verdict::Suppress(cmd) => Some(cmd),
        Verdict::Admit => None,
    }
}
