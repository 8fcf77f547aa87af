//! # Quintette todos demo
//!
//! A small project/todo tracker assembled entirely through `quintette`
//! bindings, sized to exercise the container the way a real application
//! would:
//!
//! - storage is reached through trait-object ports, and both mock stores
//!   share one in-memory database pulled from a common binding
//! - services resolve their ports from the ambient context at construction
//!   time and keep working after the context is gone
//! - the logger is itself a binding, so the live wiring and the test wiring
//!   differ only in the provider handed to [`bindings`]
//!
//! The binary wires the graph with a console logger and runs a scripted
//! scenario; the service tests wire the same graph with a silent one.

pub mod app;
pub mod entities;
pub mod logger;
pub mod repository;
pub mod services;
pub mod tags;

pub use app::{bindings, AppError, TodoApp};
