//! Editor update functions for surface focus, selection, keys and typing.

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::EditorMsg;
use crate::model::DashboardModel;

fn target(msg: &EditorMsg) -> crate::dom::NodeId {
    match msg {
        EditorMsg::Focus(node)
        | EditorMsg::Blur(node)
        | EditorMsg::PointerUp(node)
        | EditorMsg::KeyUp(node)
        | EditorMsg::DeleteBackward(node)
        | EditorMsg::DeleteForward(node)
        | EditorMsg::Select { node, .. }
        | EditorMsg::KeyDown { node, .. }
        | EditorMsg::InsertText { node, .. } => *node,
    }
}

/// Handle events inside an editable surface
pub fn update_editor(
    model: &mut DashboardModel,
    msg: EditorMsg,
    host: &mut dyn Host,
) -> Option<Cmd> {
    let doc = &mut model.document;
    let binder = &mut model.binder;

    let Some(id) = binder.binding_for_surface(doc, target(&msg)) else {
        tracing::trace!("Editor event outside any surface: {:?}", msg);
        return None;
    };

    match msg {
        EditorMsg::Focus(_) => binder.focus(doc, id),
        EditorMsg::Blur(_) => binder.blur(doc, id),
        EditorMsg::Select { selection, .. } => binder.select(doc, id, selection),
        EditorMsg::PointerUp(_) => binder.pointer_up(doc, id),
        EditorMsg::KeyUp(_) => binder.key_up(doc, id),
        EditorMsg::KeyDown { keystroke, .. } => {
            if binder.key_down(doc, host, id, &keystroke) {
                return Some(Cmd::PreventDefault);
            }
        }
        EditorMsg::InsertText { text, .. } => binder.insert_text(doc, id, &text),
        EditorMsg::DeleteBackward(_) => binder.delete_backward(doc, id),
        EditorMsg::DeleteForward(_) => binder.delete_forward(doc, id),
    }
    None
}
