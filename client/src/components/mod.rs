//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the outcome panels of the detection page from plain
//! values; they hold no state of their own.

pub mod error_notice;
pub mod result_panel;
