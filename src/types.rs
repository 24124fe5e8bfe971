use serde::{Deserialize, Serialize};
use std::fmt;

/// How a synthesized position is held on the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    Supply,
    #[serde(rename = "LP")]
    Lp,
    Staked,
    Borrow,
    Restaked,
}

impl PositionType {
    pub const ALL: [PositionType; 5] = [
        PositionType::Supply,
        PositionType::Lp,
        PositionType::Staked,
        PositionType::Borrow,
        PositionType::Restaked,
    ];
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionType::Supply => write!(f, "Supply"),
            PositionType::Lp => write!(f, "LP"),
            PositionType::Staked => write!(f, "Staked"),
            PositionType::Borrow => write!(f, "Borrow"),
            PositionType::Restaked => write!(f, "Restaked"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Checks the `0x` prefix and overall length only. The remaining 40
/// characters are intentionally not checked for hex content; tightening
/// this would change the documented 400 boundary.
pub fn validate_eth_address(address: &str) -> bool {
    address.starts_with("0x") && address.len() == 42
}
