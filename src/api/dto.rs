use serde::{Deserialize, Serialize};

use crate::catalog::ProtocolRecord;

// ============================================================================
// GET /health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub mock_mode: bool,
}

// ============================================================================
// GET /protocols
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProtocolsResponse {
    pub count: usize,
    pub protocols: Vec<ProtocolRecord>,
}

// ============================================================================
// POST /analyze-wallet
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WalletRequest {
    #[serde(default)]
    pub wallet_address: String,
}
