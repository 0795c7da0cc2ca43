//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the persistent header and the building blocks pages are
//! composed from. Only `app_header` holds state.

pub mod access_table;
pub mod app_header;
pub mod content_wrapper;
pub mod occupancy_chart;
