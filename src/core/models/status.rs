//! Task status

use serde::{Deserialize, Serialize};

/// Task status. The only transition is `Pending -> Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Still to be done
    #[default]
    Pending,
    /// Done; hidden from the priority view
    Complete,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "complete" | "completed" => Ok(Self::Complete),
            _ => Err(format!("Invalid status: {s}. Use: Pending, Complete")),
        }
    }
}
