//! Weight vectors for weighted aggregation.
//!
//! Callers send either fractional weights (`0.6, 0.4`) or integer
//! percentage-like weights (`60, 40`). Both are normalized so the stored
//! components sum to 1.

use crate::error::PriceError;

/// How the raw weights were expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawWeightForm {
    /// Every weight is a whole number (e.g. `60, 40`).
    Integer,
    /// At least one weight has a fractional part.
    Fractional,
}

/// Normalized, non-negative weights whose components sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    weights: Vec<f64>,
    form: RawWeightForm,
}

impl WeightVector {
    /// Validate and normalize raw weights.
    ///
    /// The integer case divides by the raw integer sum. The fractional case
    /// divides by its own sum too, which is a no-op when it already sums to 1.
    pub fn from_raw(raw: &[f64]) -> Result<Self, PriceError> {
        if raw.is_empty() {
            return Err(PriceError::InvalidInput("No weights supplied".to_string()));
        }
        for (i, w) in raw.iter().enumerate() {
            if !w.is_finite() {
                return Err(PriceError::InvalidInput(format!(
                    "Weight {} is not a finite number",
                    i
                )));
            }
            if *w < 0.0 {
                return Err(PriceError::InvalidInput(format!(
                    "Weight {} is negative: {}",
                    i, w
                )));
            }
        }

        let form = if raw.iter().all(|w| w.fract() == 0.0) {
            RawWeightForm::Integer
        } else {
            RawWeightForm::Fractional
        };

        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(PriceError::InvalidInput(
                "Weights sum to zero".to_string(),
            ));
        }

        Ok(Self {
            weights: raw.iter().map(|w| w / sum).collect(),
            form,
        })
    }

    /// Parse textual weights (as received from a query string).
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, PriceError> {
        let parsed = raw
            .iter()
            .map(|s| {
                let s = s.as_ref().trim();
                s.parse::<f64>().map_err(|_| {
                    PriceError::InvalidInput(format!("Non-numeric weight: {:?}", s))
                })
            })
            .collect::<Result<Vec<f64>, PriceError>>()?;
        Self::from_raw(&parsed)
    }

    /// Validate and normalize weights that must pair up with `symbol_count` symbols.
    pub fn for_symbols(raw: &[f64], symbol_count: usize) -> Result<Self, PriceError> {
        if raw.len() != symbol_count {
            return Err(PriceError::InvalidInput(format!(
                "Expected {} weights for {} symbols, got {}",
                symbol_count,
                symbol_count,
                raw.len()
            )));
        }
        Self::from_raw(raw)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn form(&self) -> RawWeightForm {
        self.form
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
