use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

const SUB_UNITS_PER_MAIN_UNIT: f64 = 100.0;

/// An amount in the currency's sub unit, e.g. kobo for NGN or pesewas for GHS.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AmountValue(pub u64);

impl AmountValue {
    /// Converts a main-unit amount (e.g. `1.5` naira) into sub units (`150` kobo).
    pub fn from_main_unit(amount: f64) -> Result<Self> {
        convert_to_sub_unit(amount).map(AmountValue)
    }

    pub fn to_main_unit(self) -> f64 {
        self.0 as f64 / SUB_UNITS_PER_MAIN_UNIT
    }
}

impl From<u16> for AmountValue {
    fn from(value: u16) -> Self {
        AmountValue(value.into())
    }
}

impl From<u32> for AmountValue {
    fn from(value: u32) -> Self {
        AmountValue(value.into())
    }
}

impl From<u64> for AmountValue {
    fn from(value: u64) -> Self {
        AmountValue(value)
    }
}

impl Display for AmountValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a main-unit amount to sub units: `1` naira is `100` kobo.
///
/// Fails when the amount is negative, not finite, or has more than two decimal places.
pub fn convert_to_sub_unit(amount: f64) -> Result<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::Amount(format!(
            "{amount} is not a finite, non-negative amount"
        )));
    }

    // `Display` renders the shortest decimal that round-trips and never uses an exponent.
    let decimals = amount
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    if decimals > 2 {
        return Err(Error::Amount(format!(
            "{amount} has more than two decimal places"
        )));
    }

    let rounded = (amount * SUB_UNITS_PER_MAIN_UNIT).round();
    if rounded >= u64::MAX as f64 {
        return Err(Error::Amount(format!("{amount} is too large")));
    }

    Ok(rounded as u64)
}

/// Converts a sub-unit amount to the main unit: `100` kobo is `1` naira.
///
/// Fails when the amount is negative, not finite, or not a whole number of sub units.
pub fn convert_to_main_unit(amount_in_sub_unit: f64) -> Result<f64> {
    if !amount_in_sub_unit.is_finite() || amount_in_sub_unit < 0.0 {
        return Err(Error::Amount(format!(
            "{amount_in_sub_unit} is not a finite, non-negative amount"
        )));
    }
    if amount_in_sub_unit.fract() != 0.0 {
        return Err(Error::Amount(format!(
            "{amount_in_sub_unit} is not a whole number of sub units"
        )));
    }

    Ok(amount_in_sub_unit / SUB_UNITS_PER_MAIN_UNIT)
}
