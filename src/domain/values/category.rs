use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web3")]
    Web3,
    #[serde(rename = "Web3 Gaming")]
    Web3Gaming,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Web3, Category::Web3Gaming];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Web3 => write!(f, "Web3"),
            Category::Web3Gaming => write!(f, "Web3 Gaming"),
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "web3" => Ok(Category::Web3),
            "web3 gaming" | "gaming" => Ok(Category::Web3Gaming),
            _ => Err(DomainError::InvalidInput(format!("Unknown category: {s}"))),
        }
    }
}
