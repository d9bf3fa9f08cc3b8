//! `procurehub-intake` — procurement request intake and lifecycle.
//!
//! The single cohesive API consumed by the transport layer and the
//! document-extraction integration: validate a submission's commodity group
//! against the catalog, persist it with a generated id and lifecycle status,
//! and serve later queries and status transitions.

pub mod config;
pub mod repository;
pub mod request;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use repository::{InMemoryRepository, RepositoryError, RequestRepository};
pub use request::{OrderLine, ProcurementRequestCreate, ProcurementRequestStored, RequestStatus};
pub use service::{CreateConfirmation, IntakeError, IntakeService};
