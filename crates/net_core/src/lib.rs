//! `net_core`: authoritative snapshot schema + outbound intent surface.
//!
//! Scope
//! - Defines the per-tick world snapshot the server replicates to clients
//! - Defines the closed set of client->server intent commands
//! - Exposes the `Connection` boundary trait the sync core talks through
//!
//! Transport, serialization, and reconnect policy live outside this crate;
//! the optional `serde` feature puts derives on the schema types so a
//! transport layer can encode them however it likes.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod command;
pub mod snapshot;
pub mod transport;
