//! # Core Guide Logic
//!
//! This module contains the guide's data model and business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Schedule + types     │
//!                    │  • Positions, predicates│
//!                    │  • State + update()     │
//!                    │                         │
//!                    │  No I/O in the reducer. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`]: channels, programs and their canvas positions
//! - [`schedule`]: JSON schedule loading and the sample generator
//! - [`position`]: schedule → canvas geometry, per-render program options
//! - [`visibility`]: viewport predicates used for windowing
//! - [`time`]: clock formatting and time comparisons
//! - [`config`]: config file, env and CLI resolution
//! - [`state`]: The `App` struct, all guide state in one place
//! - [`action`]: The `Action` enum and `update()` reducer

pub mod action;
pub mod config;
pub mod position;
pub mod schedule;
pub mod state;
pub mod time;
pub mod types;
pub mod visibility;
