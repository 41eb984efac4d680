//! Snapshots sub-client: latest prices for a batch of symbols.

use super::{snapshot, BatchSnapshot};
use crate::client::PriceClient;
use crate::error::PriceError;
use crate::shared::{Interval, Symbol};

pub struct Snapshots<'a> {
    pub(crate) client: &'a PriceClient,
}

impl<'a> Snapshots<'a> {
    pub async fn get<S: AsRef<str>>(
        &self,
        symbols: &[S],
        interval: Interval,
    ) -> Result<BatchSnapshot, PriceError> {
        let symbols = Symbol::parse_all(symbols)?;
        if symbols.is_empty() {
            return Err(PriceError::InvalidInput("No symbols supplied".to_string()));
        }
        let series = self.client.loader.load_all(&symbols, interval).await?;
        snapshot(&series)
    }
}
