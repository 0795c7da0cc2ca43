//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (chart geometry, asset URLs) kept apart from components so
//! they can be tested without a reactive runtime.

pub mod assets;
pub mod donut;
