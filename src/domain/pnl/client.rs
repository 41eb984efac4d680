//! PnL sub-client: gain/loss of a weighted basket.

use super::{percent_change, PnlResult};
use crate::client::PriceClient;
use crate::error::PriceError;
use crate::shared::Interval;

/// Interval every gain/loss figure is computed over.
pub const PNL_INTERVAL: Interval = Interval::Long;

pub struct Pnl<'a> {
    pub(crate) client: &'a PriceClient,
}

impl<'a> Pnl<'a> {
    /// Percentage change of the weighted basket over the long interval.
    pub async fn get<S: AsRef<str>>(
        &self,
        symbols: &[S],
        raw_weights: &[f64],
    ) -> Result<PnlResult, PriceError> {
        let points = self
            .client
            .aggregates()
            .get(symbols, raw_weights, PNL_INTERVAL)
            .await?;
        percent_change(&points)
    }
}
