use axum::{extract::State, Json};
use std::time::Instant;

use super::dto::*;
use crate::engine;
use crate::error::{AppError, AppResult};
use crate::types::validate_eth_address;
use crate::AppState;

const SERVICE_NAME: &str = "erc8004-risk-underwriter";

pub async fn health_check() -> Json<HealthResponse> {
    println!("[REQUEST] GET /health");
    tracing::debug!("Processing health check request");

    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        mock_mode: true,
    })
}

pub async fn get_protocols(State(state): State<AppState>) -> Json<ProtocolsResponse> {
    let start = Instant::now();
    println!("[REQUEST] GET /protocols");
    tracing::info!("Processing protocol catalog request");

    let protocols = state.catalog.protocols().to_vec();
    let count = protocols.len();

    let duration = start.elapsed().as_millis();
    println!("[RESPONSE] GET /protocols -> 200 OK ({}ms) count={}", duration, count);
    tracing::info!(duration_ms = %duration, count = %count, "Protocol catalog served");

    Json(ProtocolsResponse { count, protocols })
}

pub async fn analyze_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletRequest>,
) -> AppResult<Json<engine::AnalysisResult>> {
    let start = Instant::now();
    println!("[REQUEST] POST /analyze-wallet wallet={}", request.wallet_address);
    tracing::info!(wallet = %request.wallet_address, "Processing wallet analysis request");

    // Validation happens once here; everything past this point is
    // infallible pure computation over the catalog.
    let wallet = request.wallet_address.trim();
    if wallet.is_empty() {
        println!("[RESPONSE] POST /analyze-wallet -> 400 Bad Request (missing wallet)");
        tracing::warn!("Empty wallet address provided");
        return Err(AppError::MissingWallet);
    }
    if !validate_eth_address(wallet) {
        println!("[RESPONSE] POST /analyze-wallet -> 400 Bad Request (invalid wallet)");
        tracing::warn!(wallet = %wallet, "Malformed wallet address provided");
        return Err(AppError::InvalidWallet(wallet.to_string()));
    }
    tracing::debug!(wallet = %wallet, "Wallet address validated");

    let result = engine::analyze(&state.catalog, wallet);

    let duration = start.elapsed().as_millis();
    println!(
        "[RESPONSE] POST /analyze-wallet -> 200 OK ({}ms) score={} protocols={} value=${}",
        duration, result.risk_score, result.protocol_count, result.total_value_usd
    );
    tracing::info!(
        wallet = %wallet,
        duration_ms = %duration,
        risk_score = %result.risk_score,
        protocol_count = %result.protocol_count,
        total_value_usd = %result.total_value_usd,
        "Wallet analysis completed"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{AppConfig, ServerConfig};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::new()),
            config: Arc::new(AppConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
            }),
        }
    }

    fn wallet_request(wallet: &str) -> Json<WalletRequest> {
        Json(WalletRequest {
            wallet_address: wallet.to_string(),
        })
    }

    #[tokio::test]
    async fn test_health_reports_mock_mode() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "erc8004-risk-underwriter");
        assert!(body.mock_mode);
    }

    #[tokio::test]
    async fn test_protocols_is_stable_across_calls() {
        let state = test_state();
        let Json(first) = get_protocols(State(state.clone())).await;
        let Json(second) = get_protocols(State(state)).await;
        assert_eq!(first.count, second.count);
        let first_ids: Vec<&str> = first.protocols.iter().map(|p| p.id).collect();
        let second_ids: Vec<&str> = second.protocols.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_wallet() {
        let result = analyze_wallet(State(test_state()), wallet_request("")).await;
        assert!(matches!(result, Err(AppError::MissingWallet)));
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_wallet() {
        let result = analyze_wallet(State(test_state()), wallet_request("   ")).await;
        assert!(matches!(result, Err(AppError::MissingWallet)));
    }

    #[tokio::test]
    async fn test_analyze_rejects_short_wallet() {
        let result = analyze_wallet(State(test_state()), wallet_request("0x123")).await;
        assert!(matches!(result, Err(AppError::InvalidWallet(_))));
    }

    #[tokio::test]
    async fn test_analyze_rejects_unprefixed_full_length_wallet() {
        let result = analyze_wallet(
            State(test_state()),
            wallet_request("not-hex-prefixed-and-42-chars-long!!!!!!!!"),
        )
        .await;
        assert!(matches!(result, Err(AppError::InvalidWallet(_))));
    }

    #[tokio::test]
    async fn test_analyze_accepts_well_formed_wallet() {
        let wallet = "0x1234567890abcdef1234567890abcdef12345678";
        let Json(result) = analyze_wallet(State(test_state()), wallet_request(wallet))
            .await
            .expect("well-formed wallet must analyze");
        assert_eq!(result.wallet_address, wallet);
        assert!((25..=79).contains(&result.risk_score));
        assert!(!result.exposures.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_trims_surrounding_whitespace() {
        let wallet = "0x1234567890abcdef1234567890abcdef12345678";
        let padded = format!("  {wallet}  ");
        let Json(result) = analyze_wallet(State(test_state()), wallet_request(&padded))
            .await
            .expect("padded wallet must analyze");
        assert_eq!(result.wallet_address, wallet);
    }

    #[tokio::test]
    async fn test_analyze_is_deterministic_across_requests() {
        let wallet = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";
        let state = test_state();
        let Json(a) = analyze_wallet(State(state.clone()), wallet_request(wallet))
            .await
            .unwrap();
        let Json(b) = analyze_wallet(State(state), wallet_request(wallet))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[tokio::test]
    async fn test_analyze_is_case_insensitive() {
        let state = test_state();
        let Json(upper) = analyze_wallet(
            State(state.clone()),
            wallet_request("0xABCDEF1234567890ABCDEF1234567890ABCDEF12"),
        )
        .await
        .unwrap();
        let Json(lower) = analyze_wallet(
            State(state),
            wallet_request("0xabcdef1234567890abcdef1234567890abcdef12"),
        )
        .await
        .unwrap();
        assert_eq!(upper.risk_score, lower.risk_score);
        assert_eq!(upper.total_value_usd, lower.total_value_usd);
        let upper_ids: Vec<&str> = upper.exposures.iter().map(|e| e.protocol_id.as_str()).collect();
        let lower_ids: Vec<&str> = lower.exposures.iter().map(|e| e.protocol_id.as_str()).collect();
        assert_eq!(upper_ids, lower_ids);
    }
}
