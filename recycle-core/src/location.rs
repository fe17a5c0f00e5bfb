//! Location resolution from reverse-geocoder responses.
//!
//! The geocoder (Nominatim behind the backend) returns a loosely populated
//! `address` object. [`resolve_location`] turns it into the
//! `(city, district_key, district_label)` triple used to key locality rules.

use serde::{Deserialize, Serialize};

/// Placeholder used when no city-level field is present.
pub const UNKNOWN_PLACE: &str = "알수없음";

/// Districts that have seeded locality data. Used as the last-resort
/// substring match against the geocoder's `display_name`.
pub const DEFAULT_KNOWN_DISTRICTS: [&str; 5] = ["강남구", "서초구", "분당구", "영통구", "해운대구"];

/// Latitude/longitude pair reported by the platform location API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address fields used from the reverse-geocoder response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub city_district: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
}

/// Body of `POST /reverse-geocode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// City and district derived once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub city: String,
    /// Whitespace-stripped district, used as the lookup key.
    pub district_key: String,
    /// District as displayed to the user.
    pub district_label: String,
}

impl ResolvedLocation {
    /// `"{city} {district_label}"`, the heading of the locality panel.
    pub fn display(&self) -> String {
        format!("{} {}", self.city, self.district_label)
    }
}

/// Ordered list of district names probed in `display_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownDistricts(Vec<String>);

impl KnownDistricts {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(Into::into)
                .filter(|n: &String| !n.trim().is_empty())
                .collect(),
        )
    }

    /// First known district occurring in `display_name`.
    pub fn find_in(&self, display_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|name| display_name.contains(name.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for KnownDistricts {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_DISTRICTS)
    }
}

/// Treat empty and whitespace-only strings like absent fields.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Remove every whitespace character.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Derive a [`ResolvedLocation`] from a reverse-geocoder response.
///
/// Fallback order:
/// - city: `county`, `city`, `town`, else [`UNKNOWN_PLACE`]
/// - district: `city_district`, `suburb`, a known district found in
///   `display_name`, else the city value
///
/// The resulting `district_key` is never empty.
pub fn resolve_location(response: &GeocodeResponse, known: &KnownDistricts) -> ResolvedLocation {
    let address = response.address.clone().unwrap_or_default();

    let city = present(&address.county)
        .or_else(|| present(&address.city))
        .or_else(|| present(&address.town))
        .unwrap_or(UNKNOWN_PLACE)
        .to_string();

    let district = present(&address.city_district)
        .or_else(|| present(&address.suburb))
        .or_else(|| {
            response
                .display_name
                .as_deref()
                .and_then(|name| known.find_in(name))
        })
        .unwrap_or(&city)
        .to_string();

    let mut district_key = strip_whitespace(&district);
    if district_key.is_empty() {
        district_key = strip_whitespace(&city);
    }

    ResolvedLocation {
        city,
        district_key,
        district_label: district,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(address: GeocodeAddress, display_name: Option<&str>) -> GeocodeResponse {
        GeocodeResponse {
            address: Some(address),
            display_name: display_name.map(str::to_string),
            error: None,
        }
    }

    #[test]
    fn test_county_only_becomes_district_key() {
        let r = response(
            GeocodeAddress {
                county: Some("성남 시".to_string()),
                ..Default::default()
            },
            Some("대한민국"),
        );
        let loc = resolve_location(&r, &KnownDistricts::default());
        assert_eq!(loc.city, "성남 시");
        assert_eq!(loc.district_key, "성남시");
        assert_eq!(loc.district_label, "성남 시");
    }

    #[test]
    fn test_no_city_fields_is_unknown() {
        let r = response(
            GeocodeAddress {
                suburb: Some("역삼동".to_string()),
                ..Default::default()
            },
            None,
        );
        let loc = resolve_location(&r, &KnownDistricts::default());
        assert_eq!(loc.city, UNKNOWN_PLACE);
        assert_eq!(loc.district_key, "역삼동");
    }

    #[test]
    fn test_nothing_at_all_degenerates_to_unknown() {
        let loc = resolve_location(&GeocodeResponse::default(), &KnownDistricts::default());
        assert_eq!(loc.city, UNKNOWN_PLACE);
        assert_eq!(loc.district_key, UNKNOWN_PLACE);
        assert_eq!(loc.district_label, UNKNOWN_PLACE);
    }

    #[test]
    fn test_city_district_wins_over_suburb() {
        let r = response(
            GeocodeAddress {
                city: Some("서울특별시".to_string()),
                city_district: Some("강남구".to_string()),
                suburb: Some("역삼동".to_string()),
                ..Default::default()
            },
            None,
        );
        let loc = resolve_location(&r, &KnownDistricts::default());
        assert_eq!(loc.city, "서울특별시");
        assert_eq!(loc.district_label, "강남구");
    }

    #[test]
    fn test_county_preferred_over_city_and_town() {
        let r = response(
            GeocodeAddress {
                county: Some("수원시".to_string()),
                city: Some("서울특별시".to_string()),
                town: Some("읍".to_string()),
                ..Default::default()
            },
            None,
        );
        assert_eq!(resolve_location(&r, &KnownDistricts::default()).city, "수원시");
    }

    #[test]
    fn test_display_name_heuristic() {
        let r = response(
            GeocodeAddress {
                city: Some("부산광역시".to_string()),
                ..Default::default()
            },
            Some("우동, 해운대구, 부산광역시, 대한민국"),
        );
        let loc = resolve_location(&r, &KnownDistricts::default());
        assert_eq!(loc.district_key, "해운대구");
        assert_eq!(loc.display(), "부산광역시 해운대구");
    }

    #[test]
    fn test_custom_known_districts() {
        let r = response(
            GeocodeAddress {
                town: Some("양평군".to_string()),
                ..Default::default()
            },
            Some("양서면, 양평군"),
        );
        let known = KnownDistricts::new(["양서면"]);
        assert_eq!(resolve_location(&r, &known).district_key, "양서면");
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let r = response(
            GeocodeAddress {
                county: Some("  ".to_string()),
                city: Some("서울특별시".to_string()),
                city_district: Some(String::new()),
                suburb: Some("서초 구".to_string()),
                ..Default::default()
            },
            None,
        );
        let loc = resolve_location(&r, &KnownDistricts::default());
        assert_eq!(loc.city, "서울특별시");
        assert_eq!(loc.district_key, "서초구");
        assert_eq!(loc.district_label, "서초 구");
    }

    #[test]
    fn test_deserialize_geocoder_payload() {
        let json = r#"{
            "address": {"city": "서울특별시", "city_district": "서초구", "road": "반포대로"},
            "display_name": "반포대로, 서초구, 서울특별시"
        }"#;
        let r: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(r.error.is_none());
        assert_eq!(resolve_location(&r, &KnownDistricts::default()).district_key, "서초구");
    }
}
