//! `client_runtime`: the owning context around the sync core.
//!
//! This crate decouples the core from the renderer host. The host feeds
//! raw pointer events and a per-frame tick; the scene owns the visual
//! proxies and talks to the renderer only through the `stage::Stage`
//! primitives, so the whole thing runs against in-memory stand-ins in
//! tests.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod events;
pub mod layout;
pub mod scene;
pub mod stage;

pub use scene::GameScene;
