use serde::{Deserialize, Serialize};

/// Company that imports figurines into a market other than Japan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Distributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Distributor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let len = self.name.trim().chars().count();
        if len == 0 {
            errors.push("name: must not be blank".to_string());
        } else if !(3..=20).contains(&self.name.chars().count()) {
            errors.push("name: size must be between 3 and 20".to_string());
        }
        errors
    }
}

/// How a figurine is sold (regular stores, web shop exclusive, event exclusive...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributionChannel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub distribution: String,
}

impl DistributionChannel {
    pub fn new(id: impl Into<String>, distribution: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            distribution: distribution.into(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let len = self.distribution.trim().chars().count();
        if len == 0 {
            errors.push("distribution: must not be blank".to_string());
        } else if !(5..=30).contains(&self.distribution.chars().count()) {
            errors.push("distribution: size must be between 5 and 30".to_string());
        }
        errors
    }
}
