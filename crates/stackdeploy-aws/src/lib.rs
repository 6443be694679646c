//! AWS CloudFormation backend for stackdeploy.
//!
//! Implements `StackClient` against CloudFormation, delegating the
//! poll-until-terminal loop to the SDK's built-in waiter.

pub mod cloudformation;

pub use cloudformation::CloudFormationClient;
