//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting lives here so pages and components stay declarative and
//! the display rules can be tested without a browser.

pub mod format;
