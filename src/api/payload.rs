//! JSON envelope and response bodies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::calculator::{
    FlipReturns, RankedStrategy, RentalReturns, StrategyComparison, StrategyKind, StrategyReport,
    StrategyReturns,
};
use crate::error::InvestError;
use crate::property::Property;

/// `{success, data}` on success, `{success, error}` on failure
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A request that could not be served
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<InvestError> for ApiError {
    fn from(err: InvestError) -> Self {
        let status = match err {
            InvestError::InvalidStrategy(_) | InvestError::InvalidFinancing(_) => StatusCode::BAD_REQUEST,
            InvestError::PropertyNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{} {}", self.status.as_u16(), self.message);
        (self.status, Json(ApiResponse::failure(self.message))).into_response()
    }
}

/// Body of a single-strategy calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationData {
    pub strategy: StrategyKind,
    pub property: Property,
    pub results: StrategyResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_breakdown: Option<FlipCostBreakdown>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StrategyResults {
    Rental(RentalReturns),
    Flip(FlipResults),
}

/// Headline flip figures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipResults {
    pub total_investment: i64,
    pub net_profit: i64,
    #[serde(rename = "annualizedROI")]
    pub annualized_roi: f64,
}

/// Where a flip's money goes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipCostBreakdown {
    pub renovation_budget: i64,
    pub after_repair_value: i64,
    pub closing_costs_buy: i64,
    pub closing_costs_sell: i64,
    pub holding_costs: i64,
    pub holding_period_months: u32,
}

impl From<FlipReturns> for FlipResults {
    fn from(flip: FlipReturns) -> Self {
        Self {
            total_investment: flip.total_investment,
            net_profit: flip.net_profit,
            annualized_roi: flip.annualized_roi,
        }
    }
}

impl From<FlipReturns> for FlipCostBreakdown {
    fn from(flip: FlipReturns) -> Self {
        Self {
            renovation_budget: flip.renovation_budget,
            after_repair_value: flip.after_repair_value,
            closing_costs_buy: flip.closing_costs_buy,
            closing_costs_sell: flip.closing_costs_sell,
            holding_costs: flip.holding_costs,
            holding_period_months: flip.holding_period_months,
        }
    }
}

impl From<StrategyReport> for CalculationData {
    fn from(report: StrategyReport) -> Self {
        let (results, cost_breakdown) = match report.returns {
            StrategyReturns::Airbnb(r) | StrategyReturns::Lease(r) => (StrategyResults::Rental(r), None),
            StrategyReturns::Flip(f) => (StrategyResults::Flip(f.into()), Some(f.into())),
        };
        Self {
            strategy: report.strategy,
            property: report.property,
            results,
            cost_breakdown,
        }
    }
}

/// Body of a three-way comparison
#[derive(Debug, Serialize)]
pub struct ComparisonData {
    pub property: Property,
    #[serde(flatten)]
    pub comparison: StrategyComparison,
    pub ranking: Vec<RankedStrategy>,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub properties: usize,
}
