//! Route handlers

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::payload::{ApiError, ApiResponse, CalculationData, ComparisonData, HealthData};
use super::AppState;
use crate::calculator::{loan_term_years, FinancingParameters};
use crate::property::{Property, PropertyFilter};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Query string of `/api/calculate/:id`
///
/// Unknown parameters are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuery {
    pub strategy: String,
    pub down_payment: f64,
    pub interest_rate: f64,
    /// Years; `30` and `30.0` are both accepted
    pub loan_term: f64,
}

impl CalculateQuery {
    pub fn financing(&self) -> crate::Result<FinancingParameters> {
        let loan_term = loan_term_years(self.loan_term)?;
        Ok(FinancingParameters::new(self.down_payment, self.interest_rate, loan_term))
    }
}

/// Query string of `/api/compare/:id`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingQuery {
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term: f64,
}

impl FinancingQuery {
    pub fn financing(&self) -> crate::Result<FinancingParameters> {
        let loan_term = loan_term_years(self.loan_term)?;
        Ok(FinancingParameters::new(self.down_payment, self.interest_rate, loan_term))
    }
}

fn query_or_400<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::ok(HealthData {
        status: "ok",
        properties: state.catalog.all().len(),
    }))
}

pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PropertyFilter>, QueryRejection>,
) -> ApiResult<Vec<Property>> {
    let filter = query_or_400(query)?;
    let properties: Vec<Property> = state.catalog.search(&filter).into_iter().cloned().collect();
    log::debug!("search {:?} -> {} listings", filter, properties.len());
    Ok(Json(ApiResponse::ok(properties)))
}

pub async fn get_property(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult<Property> {
    let property = state.catalog.find(&id)?;
    Ok(Json(ApiResponse::ok(property.clone())))
}

pub async fn list_states(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<String>>> {
    let states = state.catalog.states().into_iter().map(str::to_string).collect();
    Json(ApiResponse::ok(states))
}

pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> ApiResult<CalculationData> {
    let query = query_or_400(query)?;
    let property = state.catalog.find(&id)?;

    let financing = query.financing()?;
    financing.validate(property.price)?;

    let report = state.calculator.compute_strategy(property, &query.strategy, &financing)?;
    log::info!("calculate property={} strategy={}", id, report.strategy);
    Ok(Json(ApiResponse::ok(report.into())))
}

pub async fn compare(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<FinancingQuery>, QueryRejection>,
) -> ApiResult<ComparisonData> {
    let query = query_or_400(query)?;
    let property = state.catalog.find(&id)?;

    let financing = query.financing()?;
    financing.validate(property.price)?;

    let comparison = state.calculator.compute_all_strategies(&property.financials(), &financing);
    let ranking = comparison.ranking();
    log::info!("compare property={} best={}", id, ranking[0].strategy);

    Ok(Json(ApiResponse::ok(ComparisonData {
        property: property.clone(),
        comparison,
        ranking,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::InvestmentCalculator;
    use crate::property::InMemoryCatalog;
    use axum::http::StatusCode;
    use serde_json::Value;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(InMemoryCatalog::mock_listings(), InvestmentCalculator::default()))
    }

    fn calc_query(strategy: &str) -> Result<Query<CalculateQuery>, QueryRejection> {
        Ok(Query(CalculateQuery {
            strategy: strategy.to_string(),
            down_payment: 90_000.0,
            interest_rate: 6.5,
            loan_term: 30.0,
        }))
    }

    fn to_json<T: serde::Serialize>(response: Json<ApiResponse<T>>) -> Value {
        serde_json::to_value(response.0).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_airbnb() {
        let response = calculate(State(state()), Path("1".to_string()), calc_query("airbnb"))
            .await
            .unwrap();
        let json = to_json(response);

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["strategy"], "airbnb");
        assert_eq!(json["data"]["property"]["id"], "1");
        assert_eq!(json["data"]["results"]["monthlyIncome"], 4568);
        assert_eq!(json["data"]["results"]["monthlyCashFlow"], 1318);
        assert_eq!(json["data"]["results"]["annualCashFlow"], 15811);
        assert_eq!(json["data"]["results"]["totalROI"], 15.3);
        assert!(json["data"].get("costBreakdown").is_none());
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_calculate_flip_has_cost_breakdown() {
        let response = calculate(State(state()), Path("1".to_string()), calc_query("Flip"))
            .await
            .unwrap();
        let json = to_json(response);

        assert_eq!(json["data"]["strategy"], "flip");
        assert_eq!(json["data"]["results"]["totalInvestment"], 172_103);
        assert_eq!(json["data"]["results"]["netProfit"], -66_803);
        assert_eq!(json["data"]["results"]["annualizedROI"], -77.6);
        assert_eq!(json["data"]["costBreakdown"]["renovationBudget"], 50_000);
        assert_eq!(json["data"]["costBreakdown"]["afterRepairValue"], 495_000);
        assert_eq!(json["data"]["costBreakdown"]["holdingCosts"], 18_603);
    }

    #[tokio::test]
    async fn test_calculate_errors() {
        let err = calculate(State(state()), Path("1".to_string()), calc_query("sell"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid strategy: sell");

        let err = calculate(State(state()), Path("99".to_string()), calc_query("lease"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let over_price = Ok(Query(CalculateQuery {
            strategy: "lease".to_string(),
            down_payment: 900_000.0,
            interest_rate: 6.5,
            loan_term: 30.0,
        }));
        let err = calculate(State(state()), Path("1".to_string()), over_price)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Invalid financing"));
    }

    #[tokio::test]
    async fn test_calculate_loan_term_bounds() {
        let with_term = |loan_term: f64| {
            Ok(Query(CalculateQuery {
                strategy: "airbnb".to_string(),
                down_payment: 90_000.0,
                interest_rate: 6.5,
                loan_term,
            }))
        };

        for bad in [400_000_000.0, 101.0, 15.5, 0.0, -30.0, f64::NAN] {
            let err = calculate(State(state()), Path("1".to_string()), with_term(bad))
                .await
                .unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "loanTerm {}", bad);
            assert!(err.message.starts_with("Invalid financing"), "{}", err.message);
        }

        let json = to_json(
            calculate(State(state()), Path("1".to_string()), with_term(100.0))
                .await
                .unwrap(),
        );
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn test_compare_ranks_strategies() {
        let query = Ok(Query(FinancingQuery {
            down_payment: 90_000.0,
            interest_rate: 6.5,
            loan_term: 30.0,
        }));
        let json = to_json(compare(State(state()), Path("1".to_string()), query).await.unwrap());

        let data = &json["data"];
        assert_eq!(data["property"]["city"], "Austin");
        assert_eq!(data["airbnb"]["totalROI"], 15.3);
        assert_eq!(data["flip"]["annualizedROI"], -77.6);
        assert_eq!(data["monthlyCosts"]["mortgagePayment"], 2275);
        assert_eq!(data["ranking"][0]["strategy"], "airbnb");
        assert_eq!(data["ranking"][0]["tier"], "best");
        assert_eq!(data["ranking"][2]["strategy"], "flip");
        assert_eq!(data["ranking"][2]["rank"], 3);
    }

    #[tokio::test]
    async fn test_property_endpoints() {
        let filter = Ok(Query(PropertyFilter::state("CO")));
        let json = to_json(list_properties(State(state()), filter).await.unwrap());
        let ids: Vec<_> = json["data"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
        assert_eq!(ids, vec!["2", "6"]);

        let json = to_json(get_property(State(state()), Path("5".to_string())).await.unwrap());
        assert_eq!(json["data"]["bathrooms"], 2.5);

        let err = get_property(State(state()), Path("7".to_string())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Property not found: 7");

        let json = to_json(list_states(State(state())).await);
        assert_eq!(json["data"], serde_json::json!(["TX", "CO", "FL", "AZ", "TN"]));

        let json = to_json(health(State(state())).await);
        assert_eq!(json["data"]["properties"], 6);
    }

    #[test]
    fn test_failure_envelope() {
        let json = serde_json::to_value(ApiResponse::failure("Property not found: 9")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Property not found: 9"}));
    }
}
