//! # Filter Engine
//!
//! Maps a catalog and a [`FilterSpec`] to the ordered subsequence of records
//! that satisfy every active constraint.
//!
//! ## Rules
//!
//! - Each dimension is either constrained or not. Absent fields never filter.
//! - Active constraints combine with AND. Amenities are themselves an AND: a
//!   record must carry every requested amenity.
//! - Text matching (`search_query`, `location`) is lowercase substring
//!   containment.
//! - The price range is inclusive on both bounds and only applies when it
//!   differs from [`PriceRange::DEFAULT`]. The default means "unconstrained",
//!   so a listing priced above the default ceiling still passes.
//! - Bedroom and bathroom thresholds are "at least N".
//!
//! The engine never sorts; ordering is the consumer's concern (see
//! [`crate::sort`]).

use crate::model::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive monthly rent bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const DEFAULT: PriceRange = PriceRange {
        min: 0,
        max: 150_000,
    };

    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Exactly `(0, 150000)`. A widened range such as `(0, 200000)` counts as
    /// a real constraint and excludes anything above its ceiling.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The set of constraints for one search action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_query: Option<String>,
    pub location: Option<String>,
    pub price_range: PriceRange,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub property_type: Option<String>,
    pub amenities: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = non_empty(query.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_empty(location.into());
        self
    }

    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_bedrooms(mut self, min: u32) -> Self {
        self.bedrooms = Some(min);
        self
    }

    pub fn with_bathrooms(mut self, min: u32) -> Self {
        self.bathrooms = Some(min);
        self
    }

    /// Sets the bedroom threshold from raw form input; see [`parse_threshold`].
    pub fn with_bedrooms_input(mut self, raw: &str) -> Self {
        self.bedrooms = parse_threshold(raw);
        self
    }

    pub fn with_bathrooms_input(mut self, raw: &str) -> Self {
        self.bathrooms = parse_threshold(raw);
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = non_empty(property_type.into());
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        if !amenity.is_empty() {
            self.amenities.insert(amenity);
        }
        self
    }

    pub fn with_amenities<I, A>(self, amenities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        amenities
            .into_iter()
            .fold(self, |spec, amenity| spec.with_amenity(amenity))
    }

    /// True if at least one dimension constrains the result.
    pub fn is_active(&self) -> bool {
        self.search_query.is_some()
            || self.location.is_some()
            || !self.price_range.is_default()
            || self.bedrooms.is_some()
            || self.bathrooms.is_some()
            || self.property_type.is_some()
            || !self.amenities.is_empty()
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(query) = &self.search_query {
            let query = query.to_lowercase();
            let hit = contains_ci(&record.title, &query)
                || contains_ci(&record.location, &query)
                || contains_ci(&record.description, &query);
            if !hit {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !contains_ci(&record.location, &location.to_lowercase()) {
                return false;
            }
        }

        if !self.price_range.is_default() && !self.price_range.contains(record.price) {
            return false;
        }

        if self.bedrooms.is_some_and(|min| record.bedrooms < min) {
            return false;
        }

        if self.bathrooms.is_some_and(|min| record.bathrooms < min) {
            return false;
        }

        if let Some(property_type) = &self.property_type {
            if &record.property_type != property_type {
                return false;
            }
        }

        self.amenities.iter().all(|a| record.has_amenity(a))
    }
}

/// Filters `catalog` by `spec`, preserving catalog order.
///
/// An inactive spec yields the whole catalog.
pub fn apply(catalog: &[PropertyRecord], spec: &FilterSpec) -> Vec<PropertyRecord> {
    if !spec.is_active() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}

/// Parses a minimum-count threshold the way a number input reads it: leading
/// whitespace is skipped and the leading run of digits is used. Empty or
/// non-numeric input means "no constraint". A count too large for `u32`
/// saturates, so it still constrains (and matches nothing).
pub fn parse_threshold(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn seed() -> Vec<PropertyRecord> {
        Catalog::seed().records().to_vec()
    }

    #[test]
    fn default_spec_is_identity() {
        let catalog = seed();
        assert!(!FilterSpec::default().is_active());
        assert_eq!(apply(&catalog, &FilterSpec::default()), catalog);
        assert!(apply(&[], &FilterSpec::default()).is_empty());
    }

    #[test]
    fn villa_type_matches_only_listing_four() {
        let result = apply(&seed(), &FilterSpec::new().with_property_type("Villa"));
        assert_eq!(ids(&result), ["4"]);
    }

    #[test]
    fn type_filter_is_complete() {
        let catalog = seed();
        let result = apply(&catalog, &FilterSpec::new().with_property_type("Apartment"));
        assert!(result.iter().all(|r| r.property_type == "Apartment"));
        let expected = catalog
            .iter()
            .filter(|r| r.property_type == "Apartment")
            .count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn bedroom_threshold_is_inclusive() {
        let result = apply(&seed(), &FilterSpec::new().with_bedrooms_input("3"));
        assert_eq!(ids(&result), ["1", "2", "4", "5", "6"]);
    }

    #[test]
    fn bathroom_threshold() {
        let result = apply(&seed(), &FilterSpec::new().with_bathrooms(5));
        assert_eq!(ids(&result), ["4"]);
    }

    #[test]
    fn non_numeric_threshold_is_ignored() {
        let spec = FilterSpec::new()
            .with_bedrooms_input("")
            .with_bathrooms_input("any");
        assert!(!spec.is_active());
        assert_eq!(apply(&seed(), &spec).len(), 6);
    }

    #[test]
    fn parse_threshold_reads_leading_digits() {
        assert_eq!(parse_threshold("3"), Some(3));
        assert_eq!(parse_threshold(" 4+"), Some(4));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("x2"), None);
        assert_eq!(parse_threshold("-1"), None);
        assert_eq!(parse_threshold("99999999999"), Some(u32::MAX));
    }

    #[test]
    fn oversized_threshold_matches_nothing() {
        let spec = FilterSpec::new().with_bedrooms_input("99999999999");
        assert!(spec.is_active());
        assert!(apply(&seed(), &spec).is_empty());
    }

    #[test]
    fn widened_price_range_is_a_constraint() {
        let mut expensive = seed()[3].clone();
        expensive.price = 250_000;
        let spec = FilterSpec::new().with_price_range(0, 200_000);
        assert!(spec.is_active());
        assert!(apply(&[expensive], &spec).is_empty());
    }

    #[test]
    fn search_query_is_case_insensitive_substring() {
        let result = apply(&seed(), &FilterSpec::new().with_search_query("sea"));
        assert_eq!(ids(&result), ["2"]);

        let result = apply(&seed(), &FilterSpec::new().with_search_query("BANGALORE"));
        assert_eq!(ids(&result), ["3", "5"]);
    }

    #[test]
    fn search_query_matches_description() {
        let result = apply(&seed(), &FilterSpec::new().with_search_query("marble"));
        assert_eq!(ids(&result), ["4"]);
    }

    #[test]
    fn location_matches_only_location_field() {
        // "garden" appears in listing 4's description and 6's title, never in a location
        let result = apply(&seed(), &FilterSpec::new().with_location("garden"));
        assert!(result.is_empty());

        let result = apply(&seed(), &FilterSpec::new().with_location("mumbai"));
        assert_eq!(ids(&result), ["2"]);
    }

    #[test]
    fn empty_text_fields_are_not_constraints() {
        let spec = FilterSpec::new()
            .with_search_query("")
            .with_location("  ")
            .with_property_type("");
        assert!(!spec.is_active());
    }

    #[test]
    fn amenities_require_all() {
        let spec = FilterSpec::new().with_amenities(["Pool", "Garden"]);
        let result = apply(&seed(), &spec);
        assert_eq!(ids(&result), ["4"]);
        assert!(result
            .iter()
            .all(|r| r.has_amenity("Pool") && r.has_amenity("Garden")));
    }

    #[test]
    fn price_range_is_inclusive() {
        let result = apply(&seed(), &FilterSpec::new().with_price_range(35_000, 65_000));
        assert_eq!(ids(&result), ["1", "5", "6"]);
    }

    #[test]
    fn default_price_range_does_not_clamp() {
        let mut expensive = seed()[3].clone();
        expensive.id = "7".into();
        expensive.price = 200_000;

        let spec = FilterSpec::new().with_price_range(0, 150_000);
        assert!(!spec.is_active());
        assert_eq!(ids(&apply(&[expensive.clone()], &spec)), ["7"]);

        // still unconstrained when combined with another active filter
        let spec = spec.with_property_type("Villa");
        assert_eq!(ids(&apply(&[expensive], &spec)), ["7"]);
    }

    #[test]
    fn constraints_combine_with_and() {
        let spec = FilterSpec::new()
            .with_location("bangalore")
            .with_bedrooms(3)
            .with_amenity("Pool");
        assert_eq!(ids(&apply(&seed(), &spec)), ["5"]);
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let spec = FilterSpec::new().with_property_type("Penthouse");
        assert!(apply(&seed(), &spec).is_empty());
    }
}
