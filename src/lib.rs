//! LocalQuest - turn everyday chores into quests.
//!
//! The library holds the whole app: quest catalog, player progression, the
//! quest lifecycle, screen navigation, report generation and background
//! music. `main.rs` only wires it to a terminal.

pub mod adventure_log;
pub mod app;
pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod logging;
pub mod navigator;
pub mod opening;
pub mod persistence;
pub mod profile;
pub mod quests;
pub mod report;
pub mod scheduler;
pub mod state;
pub mod ui;
pub mod view;
