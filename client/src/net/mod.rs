//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `documents` reads the vehicle registry collection from the hosted
//! document store. Nothing in the page tree depends on it completing.

pub mod documents;
