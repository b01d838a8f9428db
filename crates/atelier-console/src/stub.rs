//! Local stub controllers for standalone mode.
//!
//! When no parent console is reachable the lesson frame still runs; every
//! operation logs its invocation and reports success. `select_terminal`
//! and the dashboard booleans return `true` so exposure-gated flows run
//! end to end without a live console.

use tracing::info;

use crate::ports::{DashboardController, TerminalsController};

/// Terminals capability that logs and succeeds.
#[derive(Debug, Default)]
pub struct StubTerminals;

impl TerminalsController for StubTerminals {
    fn paste_to_terminal(&self, text: &str, session: &str) {
        info!(session = %session, text_len = text.len(), "paste_to_terminal");
    }

    fn paste_to_all_terminals(&self, text: &str) {
        info!(text_len = text.len(), "paste_to_all_terminals");
    }

    fn execute_in_terminal(&self, command: &str, session: &str, clear: bool) {
        info!(session = %session, command = %command, clear, "execute_in_terminal");
    }

    fn execute_in_all_terminals(&self, command: &str, clear: bool) {
        info!(command = %command, clear, "execute_in_all_terminals");
    }

    fn select_terminal(&self, session: &str) -> bool {
        info!(session = %session, "select_terminal");
        true
    }

    fn clear_terminal(&self, session: &str) {
        info!(session = %session, "clear_terminal");
    }

    fn clear_all_terminals(&self) {
        info!("clear_all_terminals");
    }

    fn interrupt_terminal(&self, session: &str) {
        info!(session = %session, "interrupt_terminal");
    }

    fn interrupt_all_terminals(&self) {
        info!("interrupt_all_terminals");
    }
}

/// Dashboard capability that logs and succeeds.
#[derive(Debug, Default)]
pub struct StubDashboard;

impl DashboardController for StubDashboard {
    fn expose_dashboard(&self, name: &str) -> bool {
        info!(name = %name, "expose_dashboard");
        true
    }

    fn create_dashboard(&self, name: &str, url: &str, focus: bool) -> bool {
        info!(name = %name, url = %url, focus, "create_dashboard");
        true
    }

    fn delete_dashboard(&self, name: &str) -> bool {
        info!(name = %name, "delete_dashboard");
        true
    }

    fn reload_dashboard(&self, name: &str, url: Option<&str>, focus: bool) -> bool {
        info!(name = %name, url = url.unwrap_or(""), focus, "reload_dashboard");
        true
    }

    fn collapse_workshop(&self) {
        info!("collapse_workshop");
    }

    fn reload_workshop(&self) {
        info!("reload_workshop");
    }

    fn finished_workshop(&self) {
        info!("finished_workshop");
    }

    fn terminate_session(&self) {
        info!("terminate_session");
    }

    fn preview_image(&self, src: &str, title: &str) {
        info!(src = %src, title = %title, "preview_image");
    }
}
