use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use premium_ai::error::AppError;
use premium_ai::underwriting::{LinearPremiumModel, PricingConfig, QuoteRequest, QuoteService};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_pricing_config() -> PricingConfig {
    PricingConfig {
        base_premium: 8_000.0,
        age_rate: 180.0,
        dependant_rate: 600.0,
        income_rate: 45.0,
        genetical_risk_rate: 900.0,
        condition_rate: 3_500.0,
    }
}

pub(crate) fn build_quote_service() -> Arc<QuoteService<LinearPremiumModel>> {
    let model = LinearPremiumModel::new(default_pricing_config());
    Arc::new(QuoteService::new(Arc::new(model)))
}

/// Read a collector submission from a JSON file on disk.
pub(crate) fn load_request(path: &Path) -> Result<QuoteRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
