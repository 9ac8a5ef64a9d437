//! Chat backend over a MongoDB document store.
//!
//! The service registers participants, records and lists chat messages, and
//! tracks participant liveness through periodic status updates. All
//! persistence lives in the document store; the handlers only validate,
//! filter, and map store results onto HTTP responses.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and startup wiring
//! - **`store`** - Document-store connection and per-collection operations
//! - **`routes`** - Router assembly (three endpoints, permissive CORS)
//! - **`error`** - Error taxonomy and HTTP response conversion
//! - **`extract`** - Request extractors (the `user` identity header)
//! - **`models`** - Stored document shapes
//! - **`participants`**, **`messages`**, **`status`** - Endpoint handlers

pub mod error;
pub mod extract;
pub mod messages;
pub mod models;
pub mod participants;
pub mod routes;
pub mod server;
pub mod status;
pub mod store;
