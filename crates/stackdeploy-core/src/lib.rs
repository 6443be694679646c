//! Core domain types and traits for stackdeploy.
//!
//! This crate contains:
//! - The `StackClient` trait over the remote stack service
//! - The `StackDeployer` that drives one stack creation end to end
//! - Stack request types and the error taxonomy

pub mod client;
pub mod deployer;
pub mod error;
pub mod stack;

pub use client::StackClient;
pub use deployer::StackDeployer;
pub use error::{Error, Result};
