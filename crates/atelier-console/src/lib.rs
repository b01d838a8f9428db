//! Controller layer for the surrounding workshop console.
//!
//! An embedded lesson frame drives terminals and dashboards it does not
//! own. This crate provides:
//! - The capability contracts a surrounding console must satisfy
//!   ([`TerminalsController`], [`DashboardController`])
//! - A remote-proxy variant that forwards each operation as a
//!   [`ConsoleMessage`] through a [`FrameConduit`]
//! - A local stub variant for standalone mode (log-only, always succeeds)
//! - The resolver that picks parent controllers when reachable and falls
//!   back to the stubs otherwise, once per process

pub mod message;
pub mod ports;
pub mod proxy;
pub mod resolver;
pub mod stub;

pub use message::{ConsoleMessage, FrameConduit};
pub use ports::{DashboardController, ParentConsole, TerminalsController};
pub use proxy::{ConduitConsole, ProxyDashboard, ProxyTerminals};
pub use resolver::ControllerResolver;
pub use stub::{StubDashboard, StubTerminals};
