//! Exposure gating for broadcast terminal operations.

use serde::{Deserialize, Serialize};

/// Which broadcast operations bring the terminal dashboard into view
/// before acting.
///
/// The upstream console gates paste-all, execute-all and clear-all on
/// exposing the `"terminal"` dashboard, but has never gated
/// interrupt-all. That asymmetry is preserved in the defaults rather than
/// silently corrected; set `interrupt_all` to gate it like its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposurePolicy {
    pub paste_all: bool,
    pub execute_all: bool,
    pub clear_all: bool,
    pub interrupt_all: bool,
}

impl Default for ExposurePolicy {
    fn default() -> Self {
        Self {
            paste_all: true,
            execute_all: true,
            clear_all: true,
            interrupt_all: false,
        }
    }
}
