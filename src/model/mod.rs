//! Application model - the complete state of one dashboard page
//!
//! This module contains the state root following the Elm Architecture
//! pattern. The page document is owned here; every other component
//! refers into it by [`NodeId`](crate::dom::NodeId).

use crate::binder::RichTextBinder;
use crate::config::AppConfig;
use crate::dom::Document;
use crate::intercept::InterceptorChain;
use crate::keymap::Keymap;
use crate::widgets::PageWidgets;

/// The complete page model
#[derive(Debug)]
pub struct DashboardModel {
    /// The page being driven
    pub document: Document,
    /// Rich-text bindings for the page's source fields
    pub binder: RichTextBinder,
    pub widgets: PageWidgets,
    /// Filters applied to raw host events
    pub interceptors: InterceptorChain,
    pub config: AppConfig,
}

impl DashboardModel {
    /// Model for a document, with the default event filters installed
    pub fn new(document: Document, config: AppConfig, keymap: Keymap) -> Self {
        let interceptors =
            InterceptorChain::with_defaults(&config.binder, config.widgets.hover_debounce_ms);
        Self {
            document,
            binder: RichTextBinder::new(config.binder.clone(), keymap),
            widgets: PageWidgets::new(),
            interceptors,
            config,
        }
    }

    /// Parse `html` and build a model for it
    pub fn from_html(html: &str, config: AppConfig, keymap: Keymap) -> Self {
        Self::new(Document::parse(html), config, keymap)
    }

    /// Markup of the whole page
    pub fn html(&self) -> String {
        self.document.inner_html(self.document.root())
    }
}
