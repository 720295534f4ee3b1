//! Custody Schedule Engine
//!
//! This crate answers "who has the children on this date?" for a
//! two-household custody arrangement: alternating weekends, a recurring
//! mid-week overnight, and holidays that rotate by year parity. An optional
//! school calendar overlay reports session types and upcoming school events.
//! Results are available as typed values, as pre-formatted context text, and
//! over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
