//! Conversion: HistoricalPricesResponse → Series (TryFrom + validation).

use super::wire::HistoricalPricesResponse;
use super::{PricePoint, Series};
use crate::error::PriceError;
use crate::shared::{Interval, Symbol};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesConversionError {
    Empty { symbol: Symbol, interval: Interval },
    InvalidValue { index: usize, value: String },
}

impl fmt::Display for SeriesConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesConversionError::Empty { symbol, interval } => {
                write!(f, "Provider returned no points for {} over {}", symbol, interval)
            }
            SeriesConversionError::InvalidValue { index, value } => {
                write!(f, "Point {} has a non-decimal value: {:?}", index, value)
            }
        }
    }
}

impl std::error::Error for SeriesConversionError {}

impl From<SeriesConversionError> for PriceError {
    fn from(e: SeriesConversionError) -> Self {
        match e {
            SeriesConversionError::Empty { .. } => PriceError::DataUnavailable(e.to_string()),
            SeriesConversionError::InvalidValue { .. } => {
                PriceError::MalformedPayload(e.to_string())
            }
        }
    }
}

fn parse_value(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

impl TryFrom<(Symbol, Interval, HistoricalPricesResponse)> for Series {
    type Error = SeriesConversionError;

    fn try_from(
        (symbol, interval, source): (Symbol, Interval, HistoricalPricesResponse),
    ) -> Result<Self, Self::Error> {
        if source.points.is_empty() {
            return Err(SeriesConversionError::Empty { symbol, interval });
        }

        let mut points = Vec::with_capacity(source.points.len());
        for (index, wp) in source.points.into_iter().enumerate() {
            let value =
                parse_value(&wp.value).ok_or_else(|| SeriesConversionError::InvalidValue {
                    index,
                    value: wp.value.clone(),
                })?;
            points.push(PricePoint::new(wp.timestamp, value));
        }

        Series::new(symbol.clone(), interval, points)
            .map_err(|_| SeriesConversionError::Empty { symbol, interval })
    }
}
