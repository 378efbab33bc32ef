use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRules {
    pub door_open_requires_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items_per_device: Option<u32>,
}

/// Access/capacity policy. Informational only; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub rules: PolicyRules,
}

#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    policies: Vec<Policy>,
}

impl PolicyStore {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    pub fn list(&self) -> Vec<Policy> {
        self.policies.clone()
    }
}
