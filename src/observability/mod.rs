//! Logging setup and crash reporting for the command-line tool.
//!
//! Call [`init_tracing`] once with the `-v` count and [`install_panic_hook`]
//! before dispatching a command. Library code logs through `log`/`tracing`
//! macros and never installs a subscriber itself.

pub mod panic_hook;
pub mod tracing;

pub use self::panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, level_for_verbosity};
