//! Static country → state → city reference data and lookups over it.
//!
//! Countries and states are addressed by ISO codes, cities by name within
//! their state. Every lookup is total: an unknown code yields `None` or an
//! empty list, never an error.

mod data;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub iso_code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct State {
    pub iso_code: &'static str,
    pub name: &'static str,
    pub country_code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub state_code: &'static str,
    pub country_code: &'static str,
}

pub fn all_countries() -> &'static [Country] {
    data::COUNTRIES
}

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    data::COUNTRIES.iter().find(|c| c.iso_code == code)
}

/// State codes are only unique within a country, so the lookup needs both.
pub fn state_by_code(
    country_code: &str,
    state_code: &str,
) -> Option<&'static State> {
    if state_code.is_empty() {
        return None;
    }
    data::STATES
        .iter()
        .find(|s| s.country_code == country_code && s.iso_code == state_code)
}

pub fn states_of_country(country_code: &str) -> Vec<&'static State> {
    data::STATES
        .iter()
        .filter(|s| s.country_code == country_code)
        .collect()
}

pub fn cities_of_state(
    country_code: &str,
    state_code: &str,
) -> Vec<&'static City> {
    data::CITIES
        .iter()
        .filter(|c| {
            c.country_code == country_code && c.state_code == state_code
        })
        .collect()
}

pub fn city_by_name(
    country_code: &str,
    state_code: &str,
    name: &str,
) -> Option<&'static City> {
    data::CITIES.iter().find(|c| {
        c.country_code == country_code
            && c.state_code == state_code
            && c.name == name
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_has_no_states() {
        for code in ["", "XX", "us", "USA", "ZZ"] {
            assert!(states_of_country(code).is_empty(), "{code}");
            assert!(country_by_code(code).is_none(), "{code}");
        }
    }

    #[test]
    fn states_follow_dataset_order() {
        let codes: Vec<_> =
            states_of_country("AU").iter().map(|s| s.iso_code).collect();
        let expected: Vec<_> = data::STATES
            .iter()
            .filter(|s| s.country_code == "AU")
            .map(|s| s.iso_code)
            .collect();
        assert_eq!(codes, expected);
        assert!(!codes.is_empty());
    }

    #[test]
    fn cities_match_state_and_country_exactly() {
        for state in data::STATES {
            for city in cities_of_state(state.country_code, state.iso_code) {
                assert_eq!(city.country_code, state.country_code);
                assert_eq!(city.state_code, state.iso_code);
            }
        }
        // "WA" is both a US state and an Australian state.
        let us: Vec<_> =
            cities_of_state("US", "WA").iter().map(|c| c.name).collect();
        let au: Vec<_> =
            cities_of_state("AU", "WA").iter().map(|c| c.name).collect();
        assert!(us.contains(&"Seattle"));
        assert!(!us.contains(&"Perth"));
        assert!(au.contains(&"Perth"));
        assert!(!au.contains(&"Seattle"));
    }

    #[test]
    fn single_lookups() {
        assert_eq!(country_by_code("KE").map(|c| c.name), Some("Kenya"));
        assert_eq!(
            state_by_code("US", "CA").map(|s| s.name),
            Some("California")
        );
        assert_eq!(
            state_by_code("CA", "ON").map(|s| s.name),
            Some("Ontario")
        );
        assert!(state_by_code("US", "").is_none());
        assert!(state_by_code("US", "ON").is_none());
        assert!(city_by_name("US", "CA", "Toronto").is_none());
        assert!(city_by_name("CA", "ON", "Toronto").is_some());
    }

    #[test]
    fn country_without_states() {
        assert!(country_by_code("VA").is_some());
        assert!(states_of_country("VA").is_empty());
        assert!(cities_of_state("VA", "").is_empty());
    }

    #[test]
    fn every_state_belongs_to_a_country() {
        for state in data::STATES {
            assert!(country_by_code(state.country_code).is_some());
        }
        for city in data::CITIES {
            assert!(state_by_code(city.country_code, city.state_code).is_some());
        }
    }
}
