//! Query-string driven search.
//!
//! The home page submits `?q=<text>&location=<place>`; the city shortcuts link
//! to `?city=<name>`. Both land on the search surface, which turns them into a
//! [`FilterSpec`] here.

use crate::filter::FilterSpec;
use url::form_urlencoded;

pub const PARAM_QUERY: &str = "q";
pub const PARAM_LOCATION: &str = "location";
pub const PARAM_CITY: &str = "city";

impl FilterSpec {
    /// Builds a spec from a URL query string, with or without the leading `?`.
    ///
    /// `q` maps to the free-text query and `location` to the location filter;
    /// `city` stands in for `location` when the latter is absent. Returns
    /// `None` when no recognised parameter carries a value, in which case the
    /// caller leaves its current result untouched.
    pub fn from_query_string(query: &str) -> Option<FilterSpec> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut text = None;
        let mut location = None;
        let mut city = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }
            match &*key {
                PARAM_QUERY => text = Some(value),
                PARAM_LOCATION => location = Some(value),
                PARAM_CITY => city = Some(value),
                _ => {}
            }
        }

        let location = location.or(city);
        if text.is_none() && location.is_none() {
            return None;
        }

        let mut spec = FilterSpec::new();
        spec.search_query = text;
        spec.location = location;
        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::apply;

    #[test]
    fn maps_q_and_location() {
        let spec = FilterSpec::from_query_string("?q=villa&location=Hyderabad").unwrap();
        assert_eq!(spec.search_query.as_deref(), Some("villa"));
        assert_eq!(spec.location.as_deref(), Some("Hyderabad"));

        let result = apply(Catalog::seed().records(), &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "4");
    }

    #[test]
    fn decodes_escapes() {
        let spec = FilterSpec::from_query_string("q=sea%20face&location=New+Delhi").unwrap();
        assert_eq!(spec.search_query.as_deref(), Some("sea face"));
        assert_eq!(spec.location.as_deref(), Some("New Delhi"));
    }

    #[test]
    fn empty_values_are_absent() {
        assert!(FilterSpec::from_query_string("?q=&location=").is_none());
        assert!(FilterSpec::from_query_string("").is_none());
        assert!(FilterSpec::from_query_string("sort=price-low").is_none());

        let spec = FilterSpec::from_query_string("q=&location=Mumbai").unwrap();
        assert!(spec.search_query.is_none());
        assert_eq!(spec.location.as_deref(), Some("Mumbai"));
    }

    #[test]
    fn city_falls_back_to_location() {
        let spec = FilterSpec::from_query_string("city=Bangalore").unwrap();
        assert_eq!(spec.location.as_deref(), Some("Bangalore"));

        let spec = FilterSpec::from_query_string("city=Delhi&location=Mumbai").unwrap();
        assert_eq!(spec.location.as_deref(), Some("Mumbai"));
    }
}
