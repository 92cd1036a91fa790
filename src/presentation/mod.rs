//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the dispatcher with its store (dependency injection)
//! - The HTTP surface (axum)
//! - Log output (tracing)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the dispatcher with proper dependencies
//! - `http` - Router, handlers and server loop
//! - `logging` - tracing-subscriber setup

pub mod cli;
pub mod factory;
pub mod http;
pub mod logging;

pub use cli::{Cli, Commands};
pub use factory::create_dispatcher;
pub use http::{router, serve, ApiResponse};
