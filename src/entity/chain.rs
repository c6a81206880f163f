use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub id: String,    // Display identifier, e.g. "base"
    pub name: String,  // Display name, e.g. "Base"
    pub icon: String,  // Icon URL
    pub chain_id: u64, // Wire-level chain id passed to the execution service
}

impl ChainDescriptor {
    pub fn new(id: &str, name: &str, icon: &str, chain_id: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            chain_id,
        }
    }
}
