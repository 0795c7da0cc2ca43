//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is wrapped in a `ContentWrapper` and delegates rendering details
//! to `components`. `routes::Page` names which one is mounted.

pub mod cameras;
pub mod home;
pub mod user_registration;
pub mod users;
