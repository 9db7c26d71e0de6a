use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

use super::{NodeId, PageDom};

/// Page lifecycle and input events the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    /// Whole document finished loading.
    Loaded,
    /// A partial-page update replaced the subtree rooted at `target`.
    PartialSwap { target: NodeId },
    /// A range-filter button was clicked.
    Clicked { target: NodeId },
}

impl PageEvent {
    /// Subtree a lifecycle event is scoped to; `None` for input events.
    #[must_use]
    pub fn scope<P: PageDom + ?Sized>(self, page: &P) -> Option<NodeId> {
        match self {
            PageEvent::Loaded => Some(page.document()),
            PageEvent::PartialSwap { target } => Some(target),
            PageEvent::Clicked { .. } => None,
        }
    }
}

/// Subscriber interface for page events.
pub trait PageEventHandler<P: PageDom> {
    fn id(&self) -> &str;
    fn on_event(&mut self, page: &mut P, event: PageEvent);
}

/// Subscribes a handler the host keeps inspecting after registration.
pub struct SharedHandler<H> {
    id: String,
    inner: Rc<RefCell<H>>,
}

impl<H> SharedHandler<H> {
    #[must_use]
    pub fn new(id: impl Into<String>, inner: Rc<RefCell<H>>) -> Self {
        Self {
            id: id.into(),
            inner,
        }
    }
}

impl<P: PageDom, H: PageEventHandler<P>> PageEventHandler<P> for SharedHandler<H> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, page: &mut P, event: PageEvent) {
        self.inner.borrow_mut().on_event(page, event);
    }
}

/// Ordered fan-out of page events to registered handlers.
pub struct EventBus<P: PageDom> {
    handlers: Vec<Box<dyn PageEventHandler<P>>>,
}

impl<P: PageDom> Default for EventBus<P> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<P: PageDom> EventBus<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler with a unique, non-empty id.
    pub fn subscribe(&mut self, handler: Box<dyn PageEventHandler<P>>) -> ChartResult<()> {
        let handler_id = handler.id().to_owned();
        if handler_id.is_empty() {
            return Err(ChartError::InvalidData(
                "event handler id must not be empty".to_owned(),
            ));
        }
        if self.is_subscribed(&handler_id) {
            return Err(ChartError::InvalidData(format!(
                "event handler `{handler_id}` is already subscribed"
            )));
        }
        self.handlers.push(handler);
        Ok(())
    }

    /// Removes a handler by id. Returns `true` when removed.
    pub fn unsubscribe(&mut self, handler_id: &str) -> bool {
        if let Some(position) = self
            .handlers
            .iter()
            .position(|handler| handler.id() == handler_id)
        {
            self.handlers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_subscribed(&self, handler_id: &str) -> bool {
        self.handlers.iter().any(|handler| handler.id() == handler_id)
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn dispatch(&mut self, page: &mut P, event: PageEvent) {
        trace!(?event, handlers = self.handlers.len(), "dispatch page event");
        for handler in &mut self.handlers {
            handler.on_event(page, event);
        }
    }
}
