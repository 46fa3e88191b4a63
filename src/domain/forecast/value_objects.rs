use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - a single price, denominated in INR
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Currency display used in the results slot: rupee sign, two decimals.
    pub fn format_inr(&self) -> String {
        format!("₹{:.2}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - ticker of the bank whose price is forecast
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct BankSymbol(String);

impl BankSymbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Bank symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Tickers the backend ships trained models for.
    pub fn supported() -> &'static [&'static str] {
        &["HDFCBANK", "ICICIBANK", "SBIN", "KOTAKBANK", "AXISBANK"]
    }
}

impl From<&str> for BankSymbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - forecast window selected in the form
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ForecastPeriod {
    #[strum(serialize = "day")]
    #[serde(rename = "day")]
    Day,

    #[strum(serialize = "month")]
    #[serde(rename = "month")]
    Month,

    #[strum(serialize = "year")]
    #[serde(rename = "year")]
    Year,
}

impl ForecastPeriod {
    pub fn to_wire_str(&self) -> &str {
        self.as_ref()
    }

    /// Lenient parse of the period echoed by the backend. Unknown values
    /// fall back to the day-window display policy.
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or(Self::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats_with_rupee_prefix_and_two_decimals() {
        assert_eq!(Price::from(123.4).format_inr(), "₹123.40");
        assert_eq!(Price::from(0.0).format_inr(), "₹0.00");
        assert_eq!(Price::from(1654.987).format_inr(), "₹1654.99");
    }

    #[test]
    fn bank_symbol_is_uppercased() {
        assert_eq!(BankSymbol::from("hdfcbank").value(), "HDFCBANK");
    }

    #[test]
    fn bank_symbol_rejects_empty() {
        assert!(BankSymbol::new(String::new()).is_err());
    }

    #[test]
    fn period_round_trips_through_wire_format() {
        assert_eq!(ForecastPeriod::Year.to_wire_str(), "year");
        assert_eq!(ForecastPeriod::from_wire("month"), ForecastPeriod::Month);
    }

    #[test]
    fn unknown_period_falls_back_to_day_policy() {
        assert_eq!(ForecastPeriod::from_wire("fortnight"), ForecastPeriod::Day);
    }
}
