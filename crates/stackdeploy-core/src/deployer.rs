//! Stack deployer: read a template, create the stack, wait for it.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::client::StackClient;
use crate::stack::CreateStackRequest;
use crate::{Error, Result};

/// Deploys a single stack from a local template file.
///
/// Holds no state of its own; the stack's existence and status live in the
/// remote service reached through the client.
pub struct StackDeployer {
    client: Arc<dyn StackClient>,
}

impl StackDeployer {
    pub fn new(client: Arc<dyn StackClient>) -> Self {
        Self { client }
    }

    /// Create the named stack from the template at `template_path` and
    /// block until the remote service reports it fully created.
    ///
    /// A template read failure returns before any remote call. A rejected
    /// creation request returns before the wait. No step is retried here;
    /// transient-error retries belong to the service's client library.
    pub async fn deploy(&self, stack_name: &str, template_path: impl AsRef<Path>) -> Result<()> {
        let template_path = template_path.as_ref();
        let template_body = tokio::fs::read_to_string(template_path)
            .await
            .map_err(|source| Error::Template {
                path: template_path.display().to_string(),
                source,
            })?;

        let request = CreateStackRequest::new(stack_name, template_body);

        info!(
            stack = %stack_name,
            template = %template_path.display(),
            "Submitting stack creation request"
        );
        self.client.create_stack(&request).await?;

        info!(stack = %stack_name, "Waiting for stack creation to complete");
        self.client.wait_until_created(stack_name).await?;

        info!(stack = %stack_name, "Stack created");
        Ok(())
    }
}
