use crate::model::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display ordering applied to a result sequence after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order. The catalog lists newest listings first.
    #[default]
    Newest,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Newest,
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
        }
    }

    /// Sorts in place. Stable, so equal prices keep catalog order.
    pub fn sort(&self, records: &mut [PropertyRecord]) {
        match self {
            SortOrder::Newest => {}
            SortOrder::PriceLowToHigh => records.sort_by_key(|r| r.price),
            SortOrder::PriceHighToLow => records.sort_by(|a, b| b.price.cmp(&a.price)),
        }
    }

    pub fn sorted(&self, records: &[PropertyRecord]) -> Vec<PropertyRecord> {
        let mut out = records.to_vec();
        self.sort(&mut out);
        out
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
        };
        write!(f, "{}", key)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLowToHigh),
            "price-high" => Ok(SortOrder::PriceHighToLow),
            other => Err(format!(
                "Unknown sort order '{}' (expected newest, price-low or price-high)",
                other
            )),
        }
    }
}
