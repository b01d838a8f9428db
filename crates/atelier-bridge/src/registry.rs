//! ID-keyed action dispatch.
//!
//! Registration walks declarative markup once and freezes each element's
//! handler invocation into a Bound Action; dispatch is the single generic
//! entry point that maps an interaction event back to its Bound Action.
//! Registration is best-effort: malformed elements are logged and
//! skipped, never allowed to abort the pass.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::args::ActionArgs;
use crate::facade::CommandFacade;
use crate::handlers::HandlerTable;
use crate::page::{InteractionEvent, Page};

/// A stored, ready-to-invoke handler closure for one element.
struct BoundAction {
    handler: String,
    invoke: Arc<dyn Fn() + Send + Sync>,
}

/// The bridge object owning the handler table and the action registry.
pub struct ConsoleBridge {
    facade: Arc<CommandFacade>,
    handlers: HandlerTable,
    actions: Mutex<HashMap<String, BoundAction>>,
}

impl ConsoleBridge {
    pub fn new(facade: Arc<CommandFacade>) -> Self {
        Self {
            facade,
            handlers: HandlerTable::builtin(),
            actions: Mutex::new(HashMap::new()),
        }
    }

    pub fn facade(&self) -> &Arc<CommandFacade> {
        &self.facade
    }

    /// Bind one element to its declared handler with `args` merged over
    /// the handler's defaults. Re-registering an id replaces the previous
    /// binding.
    pub fn register(&self, page: &Page, action_id: &str, args: ActionArgs) {
        let Some(element) = page.element(action_id) else {
            warn!(action_id, "register: no such element");
            return;
        };
        let Some(handler_name) = element.handler() else {
            warn!(action_id, "register: element has no handler metadata");
            return;
        };
        let Some(spec) = self.handlers.get(handler_name) else {
            warn!(action_id, handler = handler_name, "register: unknown handler");
            return;
        };

        let merged = args.merged_over(&(spec.defaults)());
        let facade = Arc::clone(&self.facade);
        let element = element.clone();
        let run = spec.run;
        let bound = BoundAction {
            handler: handler_name.to_string(),
            invoke: Arc::new(move || run(&facade, &element, &merged)),
        };

        debug!(action_id, handler = %bound.handler, "action registered");
        if let Ok(mut actions) = self.actions.lock() {
            actions.insert(action_id.to_string(), bound);
        }
    }

    /// Register every element on the page that declares a handler, taking
    /// arguments from its `data-args` metadata.
    ///
    /// Returns how many elements were visited; individual failures are
    /// logged and skipped.
    pub fn register_page(&self, page: &Page) -> usize {
        let mut visited = 0;
        for element in page.elements() {
            if element.handler().is_none() {
                continue;
            }
            visited += 1;
            let args = match element.args() {
                None => ActionArgs::new(),
                Some(raw) => match serde_json::from_str::<serde_json::Value>(raw)
                    .ok()
                    .as_ref()
                    .and_then(ActionArgs::from_value)
                {
                    Some(args) => args,
                    None => {
                        warn!(
                            action_id = element.id(),
                            "register: malformed args metadata, using defaults"
                        );
                        ActionArgs::new()
                    }
                },
            };
            self.register(page, element.id(), args);
        }
        visited
    }

    /// Invoke the Bound Action for the event's target element, if any.
    pub fn dispatch(&self, event: &InteractionEvent) {
        let invoke = match self.actions.lock() {
            Ok(actions) => match actions.get(&event.element_id) {
                Some(bound) => {
                    debug!(
                        action_id = %event.element_id,
                        handler = %bound.handler,
                        "action dispatched"
                    );
                    Some(Arc::clone(&bound.invoke))
                }
                None => {
                    debug!(action_id = %event.element_id, "dispatch: no bound action");
                    None
                }
            },
            Err(_) => None,
        };

        // Invoked outside the lock so a handler can re-enter the registry.
        if let Some(invoke) = invoke {
            invoke();
        }
    }

    pub fn is_registered(&self, action_id: &str) -> bool {
        self.actions
            .lock()
            .map(|actions| actions.contains_key(action_id))
            .unwrap_or(false)
    }

    pub fn action_count(&self) -> usize {
        self.actions.lock().map(|actions| actions.len()).unwrap_or(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
