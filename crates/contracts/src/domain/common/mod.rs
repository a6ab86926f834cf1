//! Common types and traits for all resources

pub mod draft;
pub mod envelope;
pub mod lenient;
pub mod resource;
pub mod stats;
pub mod status;

// Re-exports
pub use draft::{BodyEncoding, Draft, OptionSource, RequiredField};
pub use envelope::{ErrorBody, ListEnvelope, MutationEnvelope};
pub use resource::{Choice, Listing, Resource, ResourceKind};
pub use stats::{ActivityCounts, StatCard, StatCards};
pub use status::{NamedRef, Status};
