//! HTTP collaborators: QA service, source-metadata service, feedback relay.
//!
//! Every call is fallible and every failure is surfaced to the caller for
//! user notification; nothing here retries or caches.

mod error;
mod feedback;
mod metadata;
mod qa;

pub use error::ClientError;
pub use feedback::FeedbackClient;
pub use metadata::{MetadataClient, SourceMeta};
pub use qa::{Answer, QaClient};
