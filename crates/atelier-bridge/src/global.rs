//! Process-wide bridge handle.
//!
//! External lesson content calls the facade directly, without going
//! through the action registry, so the bridge hangs off one well-known
//! global symbol once the host has built it.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::registry::ConsoleBridge;

static BRIDGE: OnceLock<Arc<ConsoleBridge>> = OnceLock::new();

/// Install the bridge under the global handle.
///
/// The first install wins; later calls leave the existing bridge in
/// place and return `false`.
pub fn install(bridge: Arc<ConsoleBridge>) -> bool {
    let installed = BRIDGE.set(bridge).is_ok();
    if installed {
        debug!("bridge installed");
    } else {
        debug!("bridge already installed, keeping existing");
    }
    installed
}

/// The installed bridge, if the host has set one up.
pub fn installed() -> Option<Arc<ConsoleBridge>> {
    BRIDGE.get().map(Arc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::CommandFacade;
    use crate::policy::ExposurePolicy;

    use atelier_console::{StubDashboard, StubTerminals};

    fn standalone_bridge() -> Arc<ConsoleBridge> {
        Arc::new(ConsoleBridge::new(Arc::new(
            CommandFacade::with_controllers(
                Arc::new(StubTerminals),
                Arc::new(StubDashboard),
                ExposurePolicy::default(),
            ),
        )))
    }

    #[test]
    fn first_install_wins() {
        let first = standalone_bridge();
        let second = standalone_bridge();

        // Only the first install may succeed; the handle never changes after.
        let first_won = install(Arc::clone(&first));
        let second_won = install(Arc::clone(&second));
        assert!(!second_won);

        let current = installed().expect("a bridge is installed");
        if first_won {
            assert!(Arc::ptr_eq(&current, &first));
        }
        assert!(!Arc::ptr_eq(&current, &second));
    }
}
