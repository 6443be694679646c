//! CloudFormation implementation of `StackClient`.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_cloudformation::client::Waiters;
use aws_sdk_cloudformation::types::Capability as CfnCapability;
use aws_smithy_runtime_api::client::waiters::error::WaiterError;
use tracing::debug;

use stackdeploy_core::stack::{Capability, CreateStackRequest};
use stackdeploy_core::{Error, Result, StackClient};

/// Deadline handed to the SDK's create-complete waiter. Matches the
/// service waiter's classic 30s x 120 attempt budget; the per-poll
/// interval and backoff stay inside the SDK.
const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(3600);

/// `StackClient` backed by the CloudFormation API.
pub struct CloudFormationClient {
    client: aws_sdk_cloudformation::Client,
    max_wait: Duration,
}

impl CloudFormationClient {
    /// Build a client from the ambient AWS environment (profile, region,
    /// instance credentials).
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(aws_sdk_cloudformation::Client::new(&config))
    }

    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self {
            client,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    /// Override the waiter deadline.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }
}

fn to_cfn_capability(capability: Capability) -> CfnCapability {
    match capability {
        Capability::Iam => CfnCapability::CapabilityIam,
        Capability::NamedIam => CfnCapability::CapabilityNamedIam,
    }
}

#[async_trait]
impl StackClient for CloudFormationClient {
    async fn create_stack(&self, request: &CreateStackRequest) -> Result<()> {
        let mut call = self
            .client
            .create_stack()
            .stack_name(&request.stack_name)
            .template_body(&request.template_body);
        for capability in &request.capabilities {
            call = call.capabilities(to_cfn_capability(*capability));
        }

        let output = call.send().await.map_err(|err| {
            let service_error = err.into_service_error();
            if service_error.is_already_exists_exception() {
                Error::Rejected(format!("stack {} already exists", request.stack_name))
            } else {
                Error::Rejected(service_error.to_string())
            }
        })?;

        debug!(stack_id = ?output.stack_id(), "Creation request accepted");
        Ok(())
    }

    async fn wait_until_created(&self, stack_name: &str) -> Result<()> {
        self.client
            .wait_until_stack_create_complete()
            .stack_name(stack_name)
            .wait(self.max_wait)
            .await
            .map_err(|err| match err {
                WaiterError::ExceededMaxWait(inner) => Error::Timeout(format!(
                    "stack {stack_name} was still creating after {}s",
                    inner.max_wait().as_secs()
                )),
                other => Error::DeploymentFailed(format!("stack {stack_name}: {other}")),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_mapping() {
        assert_eq!(
            to_cfn_capability(Capability::Iam),
            CfnCapability::CapabilityIam
        );
        assert_eq!(
            to_cfn_capability(Capability::NamedIam),
            CfnCapability::CapabilityNamedIam
        );
    }
}
