//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer, following
//! hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `snapshot/`: Order-book snapshot file loader
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controller
//!   - `console/`: Interactive text shell

pub mod console;
pub mod http;
pub mod snapshot;
