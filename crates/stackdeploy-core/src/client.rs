//! Client abstraction over the remote stack service.

use async_trait::async_trait;

use crate::Result;
use crate::stack::CreateStackRequest;

/// Narrow interface to the remote infrastructure-management service.
///
/// Implementations submit one creation request and delegate the
/// poll-until-terminal loop to the service's own client library; the poll
/// interval, backoff, and attempt budget all live behind this trait.
#[async_trait]
pub trait StackClient: Send + Sync {
    /// Submit a stack creation request. Returns once the service has
    /// accepted or rejected the request; no resources exist yet on return.
    async fn create_stack(&self, request: &CreateStackRequest) -> Result<()>;

    /// Block until the named stack reaches a terminal state. Errors on a
    /// failure terminal state or when the client library's own polling
    /// deadline elapses.
    async fn wait_until_created(&self, stack_name: &str) -> Result<()>;
}
