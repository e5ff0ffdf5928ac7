//! Client sync core: keeps local visual proxies matched to the server's
//! entity set and turns pointer gestures into outbound intent commands.
//!
//! The crate is engine-agnostic on purpose: reconciliation talks to the
//! renderer through the `reconcile::ProxyOps` capabilities, and the input
//! systems only append `ClientCmd`s to an out vector. The owning context
//! (see `client_runtime`) supplies coordinate transforms and the real
//! connection.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::implicit_hasher
)]

pub mod reconcile;
pub mod session;
/// Pointer-to-intent systems, split by seat role.
pub mod systems;
pub mod telemetry;
