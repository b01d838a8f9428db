//! Capability contracts the surrounding console must satisfy.
//!
//! The bridge never talks to a concrete console; it talks to these traits.
//! Exactly two variants exist: the remote proxy (embedded mode, see
//! [`crate::proxy`]) and the local stub (standalone mode, see
//! [`crate::stub`]). Which one backs a given process is decided once by
//! the [`crate::resolver`].

use std::sync::Arc;

/// Operations over terminal sessions.
///
/// Sessions are identified by short string keys; the broadcast variants
/// act on every open session. All methods are synchronous and
/// fire-and-forget except `select_terminal`, whose boolean reports
/// whether the console could bring the session into view.
pub trait TerminalsController: Send + Sync {
    fn paste_to_terminal(&self, text: &str, session: &str);

    fn paste_to_all_terminals(&self, text: &str);

    fn execute_in_terminal(&self, command: &str, session: &str, clear: bool);

    fn execute_in_all_terminals(&self, command: &str, clear: bool);

    /// Bring the session into the visible/active view.
    fn select_terminal(&self, session: &str) -> bool;

    fn clear_terminal(&self, session: &str);

    fn clear_all_terminals(&self);

    fn interrupt_terminal(&self, session: &str);

    fn interrupt_all_terminals(&self);
}

/// Operations over named dashboards and the workshop session lifecycle.
///
/// The boolean-returning methods report whether the console knew the
/// named dashboard; the lifecycle methods are fire-and-forget.
pub trait DashboardController: Send + Sync {
    /// Bring the named dashboard into view.
    fn expose_dashboard(&self, name: &str) -> bool;

    fn create_dashboard(&self, name: &str, url: &str, focus: bool) -> bool;

    fn delete_dashboard(&self, name: &str) -> bool;

    /// Reload the named dashboard, optionally pointing it at a new URL.
    fn reload_dashboard(&self, name: &str, url: Option<&str>, focus: bool) -> bool;

    fn collapse_workshop(&self);

    fn reload_workshop(&self);

    fn finished_workshop(&self);

    fn terminate_session(&self);

    fn preview_image(&self, src: &str, title: &str);
}

/// What a reachable parent context exposes to an embedded frame.
///
/// Either capability set may be absent independently; the resolver
/// substitutes a stub for whichever is missing.
pub trait ParentConsole: Send + Sync {
    fn terminals(&self) -> Option<Arc<dyn TerminalsController>>;

    fn dashboard(&self) -> Option<Arc<dyn DashboardController>>;
}
