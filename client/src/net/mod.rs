//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls; route shapes and wire types live in the
//! shared `catalog` crate so the CLI speaks the same protocol.

pub mod api;
