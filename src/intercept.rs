//! Event interception
//!
//! Browser extensions injected into the page throw errors and flood hover
//! events over dialogs. Instead of patching global event dispatch, the
//! update loop runs host events through an explicit chain of filters
//! before any handler sees them. Filters are installed and removed by id.

use std::fmt;

use crate::binder::is_deferred_region;
use crate::commands::Cmd;
use crate::config::BinderConfig;
use crate::dom::{Document, NodeId};
use crate::messages::HostMsg;

/// What a filter decided about an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    /// Drop the event; the command tells the host how
    Suppress(Cmd),
}

pub trait EventFilter: fmt::Debug {
    fn name(&self) -> &'static str;

    fn inspect(&mut self, doc: &Document, event: &HostMsg) -> Verdict;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(u64);

/// Ordered set of installed filters. The first suppression wins.
#[derive(Debug, Default)]
pub struct InterceptorChain {
    next_id: u64,
    filters: Vec<(FilterId, Box<dyn EventFilter>)>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hover guard and both extension filters
    pub fn with_defaults(markers: &BinderConfig, hover_window_ms: u64) -> Self {
        let mut chain = Self::new();
        chain.install(Box::new(HoverGuard::new(markers, hover_window_ms)));
        chain.install(Box::new(ExtensionErrorFilter));
        chain.install(Box::new(RejectionFilter));
        chain
    }

    pub fn install(&mut self, filter: Box<dyn EventFilter>) -> FilterId {
        let id = FilterId(self.next_id);
        self.next_id += 1;
        tracing::debug!("Installed event filter {} as {:?}", filter.name(), id);
        self.filters.push((id, filter));
        id
    }

    /// Returns whether the filter was installed
    pub fn remove(&mut self, id: FilterId) -> bool {
        let Some(pos) = self.filters.iter().position(|(fid, _)| *fid == id) else {
            return false;
        };
        let (_, filter) = self.filters.remove(pos);
        tracing::debug!("Removed event filter {}", filter.name());
        true
    }

    pub fn is_installed(&self, id: FilterId) -> bool {
        self.filters.iter().any(|(fid, _)| *fid == id)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn inspect(&mut self, doc: &Document, event: &HostMsg) -> Verdict {
        for (_, filter) in &mut self.filters {
            if let Verdict::Suppress(cmd) = filter.inspect(doc, event) {
                return Verdict::Suppress(cmd);
            }
        }
        Verdict::Admit
    }
}

/// Admits at most one hover event per window over deferred regions
#[derive(Debug, Clone)]
pub struct HoverGuard {
    markers: BinderConfig,
    window_ms: u64,
    last_admitted: Option<u64>,
}

impl HoverGuard {
    pub fn new(markers: &BinderConfig, window_ms: u64) -> Self {
        Self {
            markers: markers.clone(),
            window_ms,
            last_admitted: None,
        }
    }

    fn in_region(&self, doc: &Document, target: NodeId) -> bool {
        is_deferred_region(doc, target, &self.markers)
            || doc
                .ancestors(target)
                .any(|a| is_deferred_region(doc, a, &self.markers))
    }
}

impl EventFilter for HoverGuard {
    fn name(&self) -> &'static str {
        "hover-guard"
    }

    fn inspect(&mut self, doc: &Document, event: &HostMsg) -> Verdict {
        let HostMsg::Hover {
            kind,
            target,
            time_ms,
        } = event
        else {
            return Verdict::Admit;
        };
        if !self.in_region(doc, *target) {
            return Verdict::Admit;
        }
        match self.last_admitted {
            Some(last) if time_ms.saturating_sub(last) < self.window_ms => {
                tracing::trace!("Suppressed {} over deferred region", kind.as_str());
                Verdict::Suppress(Cmd::StopPropagation)
            }
            _ => {
                self.last_admitted = Some(*time_ms);
                Verdict::Admit
            }
        }
    }
}

/// Suppresses errors thrown by an injected extension content script
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionErrorFilter;

impl EventFilter for ExtensionErrorFilter {
    fn name(&self) -> &'static str {
        "extension-errors"
    }

    fn inspect(&mut self, _doc: &Document, event: &HostMsg) -> Verdict {
        let HostMsg::Error { message, filename } = event else {
            return Verdict::Admit;
        };
        let from_extension = filename
            .as_deref()
            .is_some_and(|f| f.contains("contentScript.js"))
            || message.contains("'sentence'");
        let ours = ["modal", "tab", "form"].iter().any(|w| message.contains(w));
        if from_extension && !ours {
            tracing::warn!("Prevented error from extension: {}", message);
            return Verdict::Suppress(Cmd::PreventDefault);
        }
        Verdict::Admit
    }
}

/// Suppresses the extension's "reading 'sentence'" promise rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionFilter;

const SENTENCE_FAILURES: [&str; 2] = [
    "Cannot read properties of undefined (reading 'sentence')",
    "Cannot read property 'sentence' of undefined",
];

impl EventFilter for RejectionFilter {
    fn name(&self) -> &'static str {
        "sentence-rejections"
    }

    fn inspect(&mut self, _doc: &Document, event: &HostMsg) -> Verdict {
        let HostMsg::UnhandledRejection { message } = event else {
            return Verdict::Admit;
        };
        if SENTENCE_FAILURES.iter().any(|f| message.contains(f)) {
            tracing::warn!("Prevented unhandled promise rejection: {}", message);
            return Verdict::Suppress(Cmd::PreventDefault);
        }
        Verdict::Admit
    }
}
