//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `drawer` holds header chrome flags; `dashboard` is the injected data
//! provider for the home page.

pub mod dashboard;
pub mod drawer;
