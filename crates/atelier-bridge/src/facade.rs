//! The public command surface over the resolved controllers.
//!
//! Every terminal operation accepts one call shape for both the
//! single-session and broadcast forms: the session key `"*"` routes to
//! the all-sessions capability after exposing the `"terminal"` dashboard,
//! any other key is exposed and selected before the action runs. An
//! exposure failure short-circuits the action and surfaces as `false`;
//! nothing below the facade ever raises.

use std::sync::Arc;

use tracing::{debug, warn};

use atelier_common::SessionTarget;
use atelier_console::{ControllerResolver, DashboardController, TerminalsController};

use crate::policy::ExposurePolicy;

/// Name of the dashboard hosting the terminal panel.
pub const TERMINAL_DASHBOARD: &str = "terminal";

pub struct CommandFacade {
    terminals: Arc<dyn TerminalsController>,
    dashboard: Arc<dyn DashboardController>,
    policy: ExposurePolicy,
}

impl CommandFacade {
    /// Facade over whatever the resolver picked for this process.
    pub fn new(resolver: &ControllerResolver, policy: ExposurePolicy) -> Self {
        Self {
            terminals: resolver.resolve_terminals(),
            dashboard: resolver.resolve_dashboard(),
            policy,
        }
    }

    /// Facade over explicit controllers.
    pub fn with_controllers(
        terminals: Arc<dyn TerminalsController>,
        dashboard: Arc<dyn DashboardController>,
        policy: ExposurePolicy,
    ) -> Self {
        Self {
            terminals,
            dashboard,
            policy,
        }
    }

    // -- Terminal operations --

    pub fn paste_to_terminal(&self, text: &str, session: Option<&str>) -> bool {
        match SessionTarget::parse(session) {
            SessionTarget::All => self.paste_to_all_terminals(text),
            SessionTarget::One(key) => {
                if !self.expose_terminal(&key) {
                    warn!(session = %key, "paste_to_terminal: exposure failed");
                    return false;
                }
                self.terminals.paste_to_terminal(text, &key);
                true
            }
        }
    }

    pub fn paste_to_all_terminals(&self, text: &str) -> bool {
        if self.policy.paste_all && !self.expose_dashboard(TERMINAL_DASHBOARD) {
            warn!("paste_to_all_terminals: exposure failed");
            return false;
        }
        self.terminals.paste_to_all_terminals(text);
        true
    }

    /// Returns `None` when `command` is empty: the operation is absorbed
    /// without touching the controller.
    pub fn execute_in_terminal(
        &self,
        command: &str,
        session: Option<&str>,
        clear: bool,
    ) -> Option<bool> {
        if command.is_empty() {
            debug!("execute_in_terminal: empty command ignored");
            return None;
        }
        match SessionTarget::parse(session) {
            SessionTarget::All => self.execute_in_all_terminals(command, clear),
            SessionTarget::One(key) => {
                if !self.expose_terminal(&key) {
                    warn!(session = %key, "execute_in_terminal: exposure failed");
                    return Some(false);
                }
                self.terminals.execute_in_terminal(command, &key, clear);
                Some(true)
            }
        }
    }

    /// Returns `None` when `command` is empty.
    pub fn execute_in_all_terminals(&self, command: &str, clear: bool) -> Option<bool> {
        if command.is_empty() {
            debug!("execute_in_all_terminals: empty command ignored");
            return None;
        }
        if self.policy.execute_all && !self.expose_dashboard(TERMINAL_DASHBOARD) {
            warn!("execute_in_all_terminals: exposure failed");
            return Some(false);
        }
        self.terminals.execute_in_all_terminals(command, clear);
        Some(true)
    }

    pub fn clear_terminal(&self, session: Option<&str>) -> bool {
        match SessionTarget::parse(session) {
            SessionTarget::All => self.clear_all_terminals(),
            SessionTarget::One(key) => {
                if !self.expose_terminal(&key) {
                    warn!(session = %key, "clear_terminal: exposure failed");
                    return false;
                }
                self.terminals.clear_terminal(&key);
                true
            }
        }
    }

    pub fn clear_all_terminals(&self) -> bool {
        if self.policy.clear_all && !self.expose_dashboard(TERMINAL_DASHBOARD) {
            warn!("clear_all_terminals: exposure failed");
            return false;
        }
        self.terminals.clear_all_terminals();
        true
    }

    pub fn interrupt_terminal(&self, session: Option<&str>) -> bool {
        match SessionTarget::parse(session) {
            SessionTarget::All => self.interrupt_all_terminals(),
            SessionTarget::One(key) => {
                if !self.expose_terminal(&key) {
                    warn!(session = %key, "interrupt_terminal: exposure failed");
                    return false;
                }
                self.terminals.interrupt_terminal(&key);
                true
            }
        }
    }

    /// Ungated under the default [`ExposurePolicy`], unlike the other
    /// broadcast operations.
    pub fn interrupt_all_terminals(&self) -> bool {
        if self.policy.interrupt_all && !self.expose_dashboard(TERMINAL_DASHBOARD) {
            warn!("interrupt_all_terminals: exposure failed");
            return false;
        }
        self.terminals.interrupt_all_terminals();
        true
    }

    /// Bring a session into view: expose the terminal dashboard, then
    /// select the session.
    pub fn expose_terminal(&self, session: &str) -> bool {
        if !self.dashboard.expose_dashboard(TERMINAL_DASHBOARD) {
            return false;
        }
        self.terminals.select_terminal(session)
    }

    // -- Dashboard operations --

    pub fn expose_dashboard(&self, name: &str) -> bool {
        self.dashboard.expose_dashboard(name)
    }

    pub fn create_dashboard(&self, name: &str, url: &str, focus: bool) -> bool {
        self.dashboard.create_dashboard(name, url, focus)
    }

    pub fn delete_dashboard(&self, name: &str) -> bool {
        self.dashboard.delete_dashboard(name)
    }

    pub fn reload_dashboard(&self, name: &str, url: Option<&str>, focus: bool) -> bool {
        self.dashboard.reload_dashboard(name, url, focus)
    }

    // -- Workshop lifecycle --

    pub fn collapse_workshop(&self) {
        self.dashboard.collapse_workshop();
    }

    pub fn reload_workshop(&self) {
        self.dashboard.reload_workshop();
    }

    pub fn finished_workshop(&self) {
        self.dashboard.finished_workshop();
    }

    pub fn terminate_session(&self) {
        self.dashboard.terminate_session();
    }

    pub fn preview_image(&self, src: &str, title: &str) {
        self.dashboard.preview_image(src, title);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use atelier_console::{StubDashboard, StubTerminals};

    /// Shared call log so ordering across both controllers is observable.
    type CallLog = Arc<Mutex<Vec<String>>>;

    struct RecordingTerminals {
        log: CallLog,
        select_ok: bool,
    }

    impl TerminalsController for RecordingTerminals {
        fn paste_to_terminal(&self, text: &str, session: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.paste:{session}:{text}"));
        }

        fn paste_to_all_terminals(&self, text: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.paste_all:{text}"));
        }

        fn execute_in_terminal(&self, command: &str, session: &str, clear: bool) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.execute:{session}:{command}:{clear}"));
        }

        fn execute_in_all_terminals(&self, command: &str, clear: bool) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.execute_all:{command}:{clear}"));
        }

        fn select_terminal(&self, session: &str) -> bool {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.select:{session}"));
            self.select_ok
        }

        fn clear_terminal(&self, session: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.clear:{session}"));
        }

        fn clear_all_terminals(&self) {
            self.log.lock().unwrap().push("terminals.clear_all".into());
        }

        fn interrupt_terminal(&self, session: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("terminals.interrupt:{session}"));
        }

        fn interrupt_all_terminals(&self) {
            self.log
                .lock()
                .unwrap()
                .push("terminals.interrupt_all".into());
        }
    }

    struct RecordingDashboard {
        log: CallLog,
        expose_ok: bool,
    }

    impl DashboardController for RecordingDashboard {
        fn expose_dashboard(&self, name: &str) -> bool {
            self.log
                .lock()
                .unwrap()
                .push(format!("dashboard.expose:{name}"));
            self.expose_ok
        }

        fn create_dashboard(&self, name: &str, url: &str, focus: bool) -> bool {
            self.log
                .lock()
                .unwrap()
                .push(format!("dashboard.create:{name}:{url}:{focus}"));
            true
        }

        fn delete_dashboard(&self, name: &str) -> bool {
            self.log
                .lock()
                .unwrap()
                .push(format!("dashboard.delete:{name}"));
            true
        }

        fn reload_dashboard(&self, name: &str, url: Option<&str>, focus: bool) -> bool {
            self.log.lock().unwrap().push(format!(
                "dashboard.reload:{name}:{}:{focus}",
                url.unwrap_or("-")
            ));
            true
        }

        fn collapse_workshop(&self) {
            self.log.lock().unwrap().push("dashboard.collapse".into());
        }

        fn reload_workshop(&self) {
            self.log.lock().unwrap().push("dashboard.reload_workshop".into());
        }

        fn finished_workshop(&self) {
            self.log.lock().unwrap().push("dashboard.finished".into());
        }

        fn terminate_session(&self) {
            self.log.lock().unwrap().push("dashboard.terminate".into());
        }

        fn preview_image(&self, src: &str, title: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("dashboard.preview:{src}:{title}"));
        }
    }

    fn recording_facade(select_ok: bool, expose_ok: bool) -> (CommandFacade, CallLog) {
        recording_facade_with_policy(select_ok, expose_ok, ExposurePolicy::default())
    }

    fn recording_facade_with_policy(
        select_ok: bool,
        expose_ok: bool,
        policy: ExposurePolicy,
    ) -> (CommandFacade, CallLog) {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let facade = CommandFacade::with_controllers(
            Arc::new(RecordingTerminals {
                log: Arc::clone(&log),
                select_ok,
            }),
            Arc::new(RecordingDashboard {
                log: Arc::clone(&log),
                expose_ok,
            }),
            policy,
        );
        (facade, log)
    }

    fn calls(log: &CallLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    // -- Session routing --

    #[test]
    fn execute_exposes_before_acting() {
        let (facade, log) = recording_facade(true, true);

        assert_eq!(facade.execute_in_terminal("make", Some("2"), false), Some(true));
        assert_eq!(
            calls(&log),
            vec![
                "dashboard.expose:terminal",
                "terminals.select:2",
                "terminals.execute:2:make:false",
            ]
        );
    }

    #[test]
    fn execute_stops_when_exposure_fails() {
        let (facade, log) = recording_facade(false, true);

        assert_eq!(facade.execute_in_terminal("make", Some("2"), false), Some(false));
        // Select was attempted and failed; execute never ran.
        assert_eq!(
            calls(&log),
            vec!["dashboard.expose:terminal", "terminals.select:2"]
        );
    }

    #[test]
    fn execute_stops_when_dashboard_exposure_fails() {
        let (facade, log) = recording_facade(true, false);

        assert_eq!(facade.execute_in_terminal("make", Some("2"), false), Some(false));
        assert_eq!(calls(&log), vec!["dashboard.expose:terminal"]);
    }

    #[test]
    fn wildcard_routes_to_broadcast_capability() {
        let (facade, log) = recording_facade(true, true);

        assert_eq!(facade.execute_in_terminal("make", Some("*"), true), Some(true));
        // Never a select/execute against a session named "*".
        assert_eq!(
            calls(&log),
            vec!["dashboard.expose:terminal", "terminals.execute_all:make:true"]
        );
    }

    #[test]
    fn missing_session_defaults_to_session_one() {
        let (facade, log) = recording_facade(true, true);

        assert!(facade.paste_to_terminal("echo hi", None));
        assert_eq!(
            calls(&log),
            vec![
                "dashboard.expose:terminal",
                "terminals.select:1",
                "terminals.paste:1:echo hi",
            ]
        );
    }

    // -- Empty commands --

    #[test]
    fn empty_command_is_a_no_op() {
        let (facade, log) = recording_facade(true, true);

        assert_eq!(facade.execute_in_terminal("", Some("1"), false), None);
        assert_eq!(facade.execute_in_all_terminals("", false), None);
        assert!(calls(&log).is_empty());
    }

    // -- Broadcast gating --

    #[test]
    fn broadcast_paste_gates_on_terminal_dashboard() {
        let (facade, log) = recording_facade(true, false);

        assert!(!facade.paste_to_all_terminals("echo hi"));
        assert_eq!(calls(&log), vec!["dashboard.expose:terminal"]);
    }

    #[test]
    fn clear_wildcard_routes_to_broadcast_clear() {
        let (facade, log) = recording_facade(true, true);

        assert!(facade.clear_terminal(Some("*")));
        assert_eq!(
            calls(&log),
            vec!["dashboard.expose:terminal", "terminals.clear_all"]
        );
    }

    #[test]
    fn interrupt_all_is_ungated_by_default() {
        let (facade, log) = recording_facade(true, false);

        // Dashboard exposure would fail, but interrupt-all never asks.
        assert!(facade.interrupt_all_terminals());
        assert_eq!(calls(&log), vec!["terminals.interrupt_all"]);
    }

    #[test]
    fn interrupt_all_gating_is_configurable() {
        let policy = ExposurePolicy {
            interrupt_all: true,
            ..ExposurePolicy::default()
        };
        let (facade, log) = recording_facade_with_policy(true, false, policy);

        assert!(!facade.interrupt_all_terminals());
        assert_eq!(calls(&log), vec!["dashboard.expose:terminal"]);
    }

    #[test]
    fn interrupt_wildcard_uses_broadcast_interrupt() {
        let (facade, log) = recording_facade(true, true);

        assert!(facade.interrupt_terminal(Some("*")));
        assert_eq!(calls(&log), vec!["terminals.interrupt_all"]);
    }

    // -- Exposure --

    #[test]
    fn expose_terminal_exposes_dashboard_then_selects() {
        let (facade, log) = recording_facade(true, true);

        assert!(facade.expose_terminal("3"));
        assert_eq!(
            calls(&log),
            vec!["dashboard.expose:terminal", "terminals.select:3"]
        );
    }

    #[test]
    fn expose_terminal_fails_on_select_failure() {
        let (facade, _) = recording_facade(false, true);
        assert!(!facade.expose_terminal("3"));
    }

    // -- Dashboard and lifecycle delegation --

    #[test]
    fn dashboard_operations_delegate_without_policy() {
        let (facade, log) = recording_facade(true, true);

        assert!(facade.expose_dashboard("editor"));
        assert!(facade.create_dashboard("docs", "https://example.com", true));
        assert!(facade.reload_dashboard("docs", None, false));
        assert!(facade.delete_dashboard("docs"));
        facade.collapse_workshop();
        facade.finished_workshop();
        facade.terminate_session();
        facade.preview_image("img.png", "An image");

        assert_eq!(
            calls(&log),
            vec![
                "dashboard.expose:editor",
                "dashboard.create:docs:https://example.com:true",
                "dashboard.reload:docs:-:false",
                "dashboard.delete:docs",
                "dashboard.collapse",
                "dashboard.finished",
                "dashboard.terminate",
                "dashboard.preview:img.png:An image",
            ]
        );
    }

    // -- Standalone mode over the real stubs --

    #[test]
    fn standalone_paste_succeeds_end_to_end() {
        let facade = CommandFacade::with_controllers(
            Arc::new(StubTerminals),
            Arc::new(StubDashboard),
            ExposurePolicy::default(),
        );

        assert!(facade.expose_terminal("1"));
        assert!(facade.paste_to_terminal("echo hi", Some("1")));
        assert!(facade.clear_terminal(Some("*")));
        assert_eq!(facade.execute_in_terminal("ls", None, false), Some(true));
    }
}
