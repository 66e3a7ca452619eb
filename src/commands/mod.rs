//! Subcommand implementations behind the `leadgen-roi` binary.
//!
//! - **compare**: merge flags and config, run the comparison, render it
//! - **init**: write a commented `.leadgen-roi.toml`
//! - **fields**: list input fields with labels and defaults

pub mod compare;
pub mod fields;
pub mod init;

pub use compare::{handle_compare, resolve_settings, run_comparison, write_report, CompareSettings};
pub use fields::{fields_table, handle_fields};
pub use init::{init_config, init_config_in};
