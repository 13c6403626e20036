//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single piece of state, the detection form, provided as a
//! reactive signal from the root component.

pub mod detect;
