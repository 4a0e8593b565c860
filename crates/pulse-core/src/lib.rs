//! # pulse-core
//!
//! Foundation types and capability traits for the pulse server.
//!
//! This crate provides the shared vocabulary the other pulse crates depend on:
//!
//! - **Events**: [`event::TickEvent`] produced once per tick, with its ordered
//!   string-map payload [`event::EventPayload`] and the per-connection
//!   [`event::SessionContext`]
//! - **Seams**: [`source::EventSource`] (pluggable event producer) and
//!   [`render::Renderer`] (template rendering capability)
//! - **Errors**: [`errors::SessionError`] hierarchy via `thiserror`
//! - **Logging**: [`logging::init`] tracing-subscriber setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other pulse crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod event;
pub mod logging;
pub mod render;
pub mod source;
