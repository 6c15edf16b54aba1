//! Exercise tracker backend.
//!
//! Hexagonal layout: [`domain`] holds the model, ports and services,
//! [`inbound`] adapts HTTP onto the driving ports and [`outbound`] provides
//! the storage adapters behind the driven ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
