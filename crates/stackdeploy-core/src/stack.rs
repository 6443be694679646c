//! Stack request types.

use serde::{Deserialize, Serialize};

/// Capability acknowledgment attached to a creation request.
///
/// Services refuse to create identity/permission resources unless the
/// caller opts in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Iam,
    NamedIam,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Iam => write!(f, "CAPABILITY_IAM"),
            Capability::NamedIam => write!(f, "CAPABILITY_NAMED_IAM"),
        }
    }
}

/// A stack creation request.
///
/// The template body is passed through opaque; its format belongs to the
/// remote service. Name constraints and uniqueness are also remote-owned,
/// so nothing here is validated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStackRequest {
    pub stack_name: String,
    pub template_body: String,
    pub capabilities: Vec<Capability>,
}

impl CreateStackRequest {
    /// Build a request with the default `CAPABILITY_IAM` acknowledgment.
    pub fn new(stack_name: impl Into<String>, template_body: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            template_body: template_body.into(),
            capabilities: vec![Capability::Iam],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_wire_names() {
        assert_eq!(Capability::Iam.to_string(), "CAPABILITY_IAM");
        assert_eq!(Capability::NamedIam.to_string(), "CAPABILITY_NAMED_IAM");
    }

    #[test]
    fn test_new_request_acknowledges_iam() {
        let request = CreateStackRequest::new("my-iac-stack", "Resources: {}");

        assert_eq!(request.stack_name, "my-iac-stack");
        assert_eq!(request.capabilities, vec![Capability::Iam]);
    }
}
