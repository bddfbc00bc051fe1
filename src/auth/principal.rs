use serde::{Deserialize, Serialize};

/// The identity the transport layer authenticated for the current request.
/// There is no fallback identity scheme: if the platform did not authenticate
/// the caller, no `Principal` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
}

impl Principal {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
