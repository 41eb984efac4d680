//! Wire types for the historical-price provider.

use crate::shared::serde_util::flexible_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a historical-price request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPricesRequest {
    pub symbol: String,
    pub start_time: String,
    pub end_time: String,
    pub interval: String,
}

impl HistoricalPricesRequest {
    pub fn new(
        symbol: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        granularity: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            start_time: start_time.to_rfc3339(),
            end_time: end_time.to_rfc3339(),
            interval: granularity.to_string(),
        }
    }
}

/// A single price observation as the provider sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePricePoint {
    /// Decimal encoded as a string.
    pub value: String,
    #[serde(with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Provider response for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPricesResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(alias = "data")]
    pub points: Vec<WirePricePoint>,
}

impl HistoricalPricesResponse {
    pub fn from_points(points: Vec<WirePricePoint>) -> Self {
        Self {
            symbol: None,
            currency: None,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let start = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let end = DateTime::<Utc>::from_timestamp(86_400, 0).unwrap();
        let req = HistoricalPricesRequest::new("ETH", start, end, "5m");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["symbol"], "ETH");
        assert_eq!(json["interval"], "5m");
        assert_eq!(json["startTime"], "1970-01-01T00:00:00+00:00");
        assert_eq!(json["endTime"], "1970-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_response_accepts_data_alias() {
        let json = r#"{
            "symbol": "ETH",
            "currency": "usd",
            "data": [
                {"value": "3021.55", "timestamp": "2024-05-01T00:00:00Z"},
                {"value": "3050.10", "timestamp": "2024-05-01T00:05:00Z"}
            ]
        }"#;
        let resp: HistoricalPricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.points.len(), 2);
        assert_eq!(resp.points[0].value, "3021.55");
        assert_eq!(resp.currency.as_deref(), Some("usd"));
    }

    #[test]
    fn test_response_accepts_points_field() {
        let json = r#"{"points": [{"value": "1", "timestamp": 1714521600000}]}"#;
        let resp: HistoricalPricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.points.len(), 1);
        assert!(resp.symbol.is_none());
    }

    #[test]
    fn test_response_without_points_is_malformed() {
        assert!(serde_json::from_str::<HistoricalPricesResponse>(r#"{"symbol":"ETH"}"#).is_err());
    }
}
