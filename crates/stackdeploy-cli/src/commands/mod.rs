//! CLI command implementations.

use std::sync::Arc;

use anyhow::Result;
use stackdeploy_aws::CloudFormationClient;
use stackdeploy_core::StackDeployer;

/// Create a stack from a local template and block until the service
/// reports it fully created. Any failure propagates out unrecovered.
pub async fn deploy(stack_name: &str, template: &str) -> Result<()> {
    let client = Arc::new(CloudFormationClient::from_env().await);
    let deployer = StackDeployer::new(client);

    deployer.deploy(stack_name, template).await?;

    println!("Stack {} created successfully.", stack_name);
    Ok(())
}
