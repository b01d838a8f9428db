//! Named command handlers bindable to UI elements.
//!
//! Each entry defines its own argument defaults and calls exactly one
//! facade operation. Handler names are the vocabulary markup uses in its
//! `data-handler` metadata; anything outside this table is rejected at
//! registration time.

use std::collections::HashMap;

use atelier_common::DEFAULT_SESSION;

use crate::args::ActionArgs;
use crate::facade::CommandFacade;
use crate::page::Element;

pub type HandlerFn = fn(&CommandFacade, &Element, &ActionArgs);

/// A named handler with its default arguments.
pub struct HandlerSpec {
    pub defaults: fn() -> ActionArgs,
    pub run: HandlerFn,
}

/// The fixed handler vocabulary.
pub struct HandlerTable {
    entries: HashMap<&'static str, HandlerSpec>,
}

impl HandlerTable {
    /// Table with every built-in handler registered.
    pub fn builtin() -> Self {
        let mut entries: HashMap<&'static str, HandlerSpec> = HashMap::new();

        entries.insert(
            "terminal:execute",
            HandlerSpec {
                defaults: || ActionArgs::new().with("session", DEFAULT_SESSION).with("clear", false),
                run: terminal_execute,
            },
        );
        entries.insert(
            "terminal:execute-all",
            HandlerSpec {
                defaults: || ActionArgs::new().with("clear", false),
                run: terminal_execute_all,
            },
        );
        entries.insert(
            "terminal:interrupt",
            HandlerSpec {
                defaults: || ActionArgs::new().with("session", DEFAULT_SESSION),
                run: terminal_interrupt,
            },
        );
        entries.insert(
            "terminal:interrupt-all",
            HandlerSpec {
                defaults: ActionArgs::new,
                run: terminal_interrupt_all,
            },
        );
        entries.insert(
            "terminal:clear",
            HandlerSpec {
                defaults: || ActionArgs::new().with("session", DEFAULT_SESSION),
                run: terminal_clear,
            },
        );
        entries.insert(
            "terminal:clear-all",
            HandlerSpec {
                defaults: ActionArgs::new,
                run: terminal_clear_all,
            },
        );
        entries.insert(
            "dashboard:expose",
            HandlerSpec {
                defaults: ActionArgs::new,
                run: dashboard_expose,
            },
        );
        entries.insert(
            "dashboard:create",
            HandlerSpec {
                defaults: || ActionArgs::new().with("url", "").with("focus", true),
                run: dashboard_create,
            },
        );
        entries.insert(
            "dashboard:delete",
            HandlerSpec {
                defaults: ActionArgs::new,
                run: dashboard_delete,
            },
        );
        entries.insert(
            "dashboard:reload",
            HandlerSpec {
                defaults: || ActionArgs::new().with("focus", false),
                run: dashboard_reload,
            },
        );

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&HandlerSpec> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Handler names, sorted for stable logging.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// =============================================================================
// TERMINAL HANDLERS
// =============================================================================

fn terminal_execute(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    let command = args.str("command").unwrap_or("");
    if command.is_empty() {
        return;
    }
    facade.execute_in_terminal(command, args.str("session"), args.bool_or("clear", false));
}

fn terminal_execute_all(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    let command = args.str("command").unwrap_or("");
    if command.is_empty() {
        return;
    }
    facade.execute_in_all_terminals(command, args.bool_or("clear", false));
}

fn terminal_interrupt(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    facade.interrupt_terminal(args.str("session"));
}

fn terminal_interrupt_all(facade: &CommandFacade, _element: &Element, _args: &ActionArgs) {
    facade.interrupt_all_terminals();
}

fn terminal_clear(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    facade.clear_terminal(args.str("session"));
}

fn terminal_clear_all(facade: &CommandFacade, _element: &Element, _args: &ActionArgs) {
    facade.clear_all_terminals();
}

// =============================================================================
// DASHBOARD HANDLERS
// =============================================================================

fn dashboard_expose(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    if let Some(name) = args.str("name").filter(|name| !name.is_empty()) {
        facade.expose_dashboard(name);
    }
}

fn dashboard_create(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    if let Some(name) = args.str("name").filter(|name| !name.is_empty()) {
        facade.create_dashboard(
            name,
            args.str("url").unwrap_or(""),
            args.bool_or("focus", true),
        );
    }
}

fn dashboard_delete(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    if let Some(name) = args.str("name").filter(|name| !name.is_empty()) {
        facade.delete_dashboard(name);
    }
}

fn dashboard_reload(facade: &CommandFacade, _element: &Element, args: &ActionArgs) {
    if let Some(name) = args.str("name").filter(|name| !name.is_empty()) {
        facade.reload_dashboard(name, args.str("url"), args.bool_or("focus", false));
    }
}
