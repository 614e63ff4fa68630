//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::dom::NodeId;

/// Side effect requested from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Cancel the browser default for the event being handled
    PreventDefault,
    /// Stop the event from reaching further listeners
    StopPropagation,
    /// After `delay_ms`, scroll `node` into view (nearest edge, smooth)
    ScrollIntoView { node: NodeId, delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Whether this command (or any command in a batch) cancels the default
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::prevents_default),
            _ => false,
        }
    }

    pub fn stops_propagation(&self) -> bool {
        match self {
            Cmd::StopPropagation => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::stops_propagation),
            _ => false,
        }
    }

    /// Flatten nested batches into a single list
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_queries() {
        let cmd = Cmd::batch(vec![
            Cmd::StopPropagation,
            Cmd::batch(vec![Cmd::PreventDefault]),
        ]);
        assert!(cmd.prevents_default());
        assert!(cmd.stops_propagation());
        assert_eq!(cmd.flatten(), vec![Cmd::StopPropagation, Cmd::PreventDefault]);
        assert!(!Cmd::StopPropagation.prevents_default());
    }
}
