//! Application Layer
//!
//! Use cases that orchestrate the serving flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ContentDispatcher` - Raw and preview delivery of theme files, listings

pub mod dispatcher;

pub use dispatcher::{ContentDispatcher, Delivery, DeliveryMode, DispatchError};
