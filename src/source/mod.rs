//! Data sources for the profile container.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpUserSource;

use async_trait::async_trait;

use crate::model::UserRecord;

/// Something that can produce the current user.
///
/// The container only depends on this trait, so tests and alternative
/// backends can stand in for the HTTP endpoint.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Retrieve the current user record.
    async fn fetch_current_user(&self) -> Result<UserRecord, FetchError>;

    /// Human-readable locator, shown in the header and in logs.
    fn describe(&self) -> String;
}
