//! Attendees Domain
//!
//! Registration, the attendee roster and the designation analytics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← public registration/count, admin roster + analytics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, id + timestamp assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← database::DocumentStore<Attendee>
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Attendee, RegisterAttendee, DesignationBreakdown
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryDocumentStore;
//! use domain_attendees::{AttendeeService, handlers};
//!
//! let service = AttendeeService::new(MemoryDocumentStore::new());
//!
//! let public = handlers::public_router(service.clone());
//! let admin = handlers::admin_router(service.clone());
//! let analytics = handlers::analytics_router(service);
//! ```

pub mod analytics;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use analytics::{DesignationBreakdown, designation_breakdown};
pub use error::{AttendeeError, AttendeeResult};
pub use handlers::{AdminApiDoc, AnalyticsApiDoc, ApiDoc};
pub use models::{Attendee, AttendeeCount, RegisterAttendee};
pub use service::AttendeeService;
