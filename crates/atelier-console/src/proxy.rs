//! Remote-proxy controllers for embedded mode.
//!
//! Each operation is serialized as one [`ConsoleMessage`] and posted
//! through the [`FrameConduit`]. Void operations log a rejected post and
//! move on; boolean operations return the conduit's synchronous
//! accept/reject result.

use std::sync::Arc;

use tracing::warn;

use crate::message::{ConsoleMessage, FrameConduit};
use crate::ports::{DashboardController, ParentConsole, TerminalsController};

/// Terminals capability forwarded over a frame conduit.
pub struct ProxyTerminals {
    conduit: Arc<dyn FrameConduit>,
}

impl ProxyTerminals {
    pub fn new(conduit: Arc<dyn FrameConduit>) -> Self {
        Self { conduit }
    }

    fn post(&self, message: ConsoleMessage) -> bool {
        let accepted = self.conduit.post(&message);
        if !accepted {
            warn!(kind = %message.kind, "console rejected command");
        }
        accepted
    }
}

impl TerminalsController for ProxyTerminals {
    fn paste_to_terminal(&self, text: &str, session: &str) {
        self.post(ConsoleMessage::new(
            "terminal_paste",
            serde_json::json!({ "session": session, "text": text }),
        ));
    }

    fn paste_to_all_terminals(&self, text: &str) {
        self.post(ConsoleMessage::new(
            "terminal_paste_all",
            serde_json::json!({ "text": text }),
        ));
    }

    fn execute_in_terminal(&self, command: &str, session: &str, clear: bool) {
        self.post(ConsoleMessage::new(
            "terminal_execute",
            serde_json::json!({ "session": session, "command": command, "clear": clear }),
        ));
    }

    fn execute_in_all_terminals(&self, command: &str, clear: bool) {
        self.post(ConsoleMessage::new(
            "terminal_execute_all",
            serde_json::json!({ "command": command, "clear": clear }),
        ));
    }

    fn select_terminal(&self, session: &str) -> bool {
        self.post(ConsoleMessage::new(
            "terminal_select",
            serde_json::json!({ "session": session }),
        ))
    }

    fn clear_terminal(&self, session: &str) {
        self.post(ConsoleMessage::new(
            "terminal_clear",
            serde_json::json!({ "session": session }),
        ));
    }

    fn clear_all_terminals(&self) {
        self.post(ConsoleMessage::bare("terminal_clear_all"));
    }

    fn interrupt_terminal(&self, session: &str) {
        self.post(ConsoleMessage::new(
            "terminal_interrupt",
            serde_json::json!({ "session": session }),
        ));
    }

    fn interrupt_all_terminals(&self) {
        self.post(ConsoleMessage::bare("terminal_interrupt_all"));
    }
}

/// Dashboard capability forwarded over a frame conduit.
pub struct ProxyDashboard {
    conduit: Arc<dyn FrameConduit>,
}

impl ProxyDashboard {
    pub fn new(conduit: Arc<dyn FrameConduit>) -> Self {
        Self { conduit }
    }

    fn post(&self, message: ConsoleMessage) -> bool {
        let accepted = self.conduit.post(&message);
        if !accepted {
            warn!(kind = %message.kind, "console rejected command");
        }
        accepted
    }
}

impl DashboardController for ProxyDashboard {
    fn expose_dashboard(&self, name: &str) -> bool {
        self.post(ConsoleMessage::new(
            "dashboard_expose",
            serde_json::json!({ "name": name }),
        ))
    }

    fn create_dashboard(&self, name: &str, url: &str, focus: bool) -> bool {
        self.post(ConsoleMessage::new(
            "dashboard_create",
            serde_json::json!({ "name": name, "url": url, "focus": focus }),
        ))
    }

    fn delete_dashboard(&self, name: &str) -> bool {
        self.post(ConsoleMessage::new(
            "dashboard_delete",
            serde_json::json!({ "name": name }),
        ))
    }

    fn reload_dashboard(&self, name: &str, url: Option<&str>, focus: bool) -> bool {
        self.post(ConsoleMessage::new(
            "dashboard_reload",
            serde_json::json!({ "name": name, "url": url, "focus": focus }),
        ))
    }

    fn collapse_workshop(&self) {
        self.post(ConsoleMessage::bare("workshop_collapse"));
    }

    fn reload_workshop(&self) {
        self.post(ConsoleMessage::bare("workshop_reload"));
    }

    fn finished_workshop(&self) {
        self.post(ConsoleMessage::bare("workshop_finished"));
    }

    fn terminate_session(&self) {
        self.post(ConsoleMessage::bare("session_terminate"));
    }

    fn preview_image(&self, src: &str, title: &str) {
        self.post(ConsoleMessage::new(
            "image_preview",
            serde_json::json!({ "src": src, "title": title }),
        ));
    }
}

/// A parent console reached entirely through one frame conduit.
///
/// This is the embedded-mode assembly: both capability sets are proxies
/// over the same conduit.
pub struct ConduitConsole {
    conduit: Arc<dyn FrameConduit>,
}

impl ConduitConsole {
    pub fn new(conduit: Arc<dyn FrameConduit>) -> Self {
        Self { conduit }
    }
}

impl ParentConsole for ConduitConsole {
    fn terminals(&self) -> Option<Arc<dyn TerminalsController>> {
        Some(Arc::new(ProxyTerminals::new(Arc::clone(&self.conduit))))
    }

    fn dashboard(&self) -> Option<Arc<dyn DashboardController>> {
        Some(Arc::new(ProxyDashboard::new(Arc::clone(&self.conduit))))
    }
}

// =============================================================================
// TESTS
// =============================================================================
