//! Aggregates sub-client: weighted multi-symbol series.

use super::{aggregate, AlignedPoint};
use crate::client::PriceClient;
use crate::error::PriceError;
use crate::shared::{Interval, Symbol, WeightVector};

/// Sub-client for weighted aggregates.
pub struct Aggregates<'a> {
    pub(crate) client: &'a PriceClient,
}

impl<'a> Aggregates<'a> {
    /// Weighted series over `interval`.
    ///
    /// Symbols and weights are validated before anything is fetched.
    pub async fn get<S: AsRef<str>>(
        &self,
        symbols: &[S],
        raw_weights: &[f64],
        interval: Interval,
    ) -> Result<Vec<AlignedPoint>, PriceError> {
        let symbols = Symbol::parse_all(symbols)?;
        let weights = WeightVector::for_symbols(raw_weights, symbols.len())?;
        self.get_weighted(&symbols, &weights, interval).await
    }

    /// Same as [`get`](Self::get) with weights still in textual form.
    pub async fn get_parsed<S: AsRef<str>, W: AsRef<str>>(
        &self,
        symbols: &[S],
        raw_weights: &[W],
        interval: Interval,
    ) -> Result<Vec<AlignedPoint>, PriceError> {
        let symbols = Symbol::parse_all(symbols)?;
        if raw_weights.len() != symbols.len() {
            return Err(PriceError::InvalidInput(format!(
                "Expected {} weights, got {}",
                symbols.len(),
                raw_weights.len()
            )));
        }
        let weights = WeightVector::parse(raw_weights)?;
        self.get_weighted(&symbols, &weights, interval).await
    }

    pub async fn get_weighted(
        &self,
        symbols: &[Symbol],
        weights: &WeightVector,
        interval: Interval,
    ) -> Result<Vec<AlignedPoint>, PriceError> {
        if symbols.is_empty() {
            return Err(PriceError::InvalidInput("No symbols supplied".to_string()));
        }
        if symbols.len() != weights.len() {
            return Err(PriceError::InvalidInput(format!(
                "{} symbols but {} weights",
                symbols.len(),
                weights.len()
            )));
        }

        let series = self.client.loader.load_all(symbols, interval).await?;
        aggregate(&series, weights, interval)
    }
}
