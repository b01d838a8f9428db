//! Parent-or-stub controller selection.
//!
//! Resolution runs at most once per capability set per process: the first
//! call picks the parent's controller if the parent exposes one, the
//! local stub otherwise, and every later call returns the same instance.
//! A missing parent is standalone mode, not an error.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::ports::{DashboardController, ParentConsole, TerminalsController};
use crate::stub::{StubDashboard, StubTerminals};

pub struct ControllerResolver {
    parent: Option<Arc<dyn ParentConsole>>,
    terminals: OnceLock<Arc<dyn TerminalsController>>,
    dashboard: OnceLock<Arc<dyn DashboardController>>,
}

impl ControllerResolver {
    pub fn new(parent: Option<Arc<dyn ParentConsole>>) -> Self {
        Self {
            parent,
            terminals: OnceLock::new(),
            dashboard: OnceLock::new(),
        }
    }

    /// Resolver for a frame with no reachable parent context.
    pub fn standalone() -> Self {
        Self::new(None)
    }

    /// The terminals controller for the rest of the process lifetime.
    pub fn resolve_terminals(&self) -> Arc<dyn TerminalsController> {
        Arc::clone(self.terminals.get_or_init(|| {
            match self.parent.as_ref().and_then(|p| p.terminals()) {
                Some(controller) => {
                    debug!("terminals: parent controller");
                    controller
                }
                None => {
                    debug!("terminals: local stub");
                    Arc::new(StubTerminals)
                }
            }
        }))
    }

    /// The dashboard controller for the rest of the process lifetime.
    pub fn resolve_dashboard(&self) -> Arc<dyn DashboardController> {
        Arc::clone(self.dashboard.get_or_init(|| {
            match self.parent.as_ref().and_then(|p| p.dashboard()) {
                Some(controller) => {
                    debug!("dashboard: parent controller");
                    controller
                }
                None => {
                    debug!("dashboard: local stub");
                    Arc::new(StubDashboard)
                }
            }
        }))
    }
}
