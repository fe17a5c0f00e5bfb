//! Locality disposal rules and the panel that displays them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::location::ResolvedLocation;
use crate::messages;

/// Disposal rules for one city/district pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityInfo {
    /// When household waste may be put out.
    #[serde(rename = "배출시간", default)]
    pub discharge_time: String,
    /// Recyclable type -> collection instructions.
    #[serde(rename = "재활용품", default)]
    pub recyclables: BTreeMap<String, String>,
    /// Bag type -> bag colour.
    #[serde(rename = "봉투색상", default)]
    pub bag_colors: BTreeMap<String, String>,
}

/// Why the location could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFailure {
    /// Geolocation denied or unavailable.
    Geolocation,
    /// Reverse-geocode call failed or reported an error.
    ReverseGeocode,
}

/// What the locality panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocalityPanel {
    /// Waiting for location or rules.
    #[default]
    Pending,
    /// Rules found for the resolved locality.
    Info {
        location: ResolvedLocation,
        info: LocalityInfo,
    },
    /// The backend has no rules for this locality.
    NoData { location: ResolvedLocation },
    /// Location could not be resolved; terminal for the session.
    LocationUnavailable(LocationFailure),
    /// Rules request failed.
    LoadFailed,
}

impl LocalityPanel {
    /// Panel heading or the fixed message for non-data states.
    pub fn headline(&self) -> String {
        match self {
            Self::Pending => messages::LOCALITY_PENDING.to_string(),
            Self::Info { location, .. } => format!("📍 {}", location.display()),
            Self::NoData { location } => messages::no_locality_data(location),
            Self::LocationUnavailable(LocationFailure::Geolocation) => {
                messages::GEOLOCATION_FAILED.to_string()
            }
            Self::LocationUnavailable(LocationFailure::ReverseGeocode) => {
                messages::REVERSE_GEOCODE_FAILED.to_string()
            }
            Self::LoadFailed => messages::RECYCLE_INFO_FAILED.to_string(),
        }
    }

    pub fn info(&self) -> Option<&LocalityInfo> {
        match self {
            Self::Info { info, .. } => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> ResolvedLocation {
        ResolvedLocation {
            city: "서울특별시".to_string(),
            district_key: "강남구".to_string(),
            district_label: "강남구".to_string(),
        }
    }

    #[test]
    fn test_deserialize_korean_keys() {
        let json = r#"{
            "배출시간": "월~금 오후 8시 ~ 오전 5시",
            "재활용품": {"페트병": "목요일", "비닐": "목요일"},
            "봉투색상": {"소각용": "원색"}
        }"#;
        let info: LocalityInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.discharge_time, "월~금 오후 8시 ~ 오전 5시");
        assert_eq!(info.recyclables.get("페트병").map(String::as_str), Some("목요일"));
        assert_eq!(info.bag_colors.len(), 1);
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let info: LocalityInfo = serde_json::from_str(r#"{"배출시간": "매일"}"#).unwrap();
        assert!(info.recyclables.is_empty());
        assert!(info.bag_colors.is_empty());
    }

    #[test]
    fn test_headlines() {
        let panel = LocalityPanel::NoData { location: seoul() };
        assert_eq!(panel.headline(), "📍 서울특별시 강남구 지역의 데이터가 없습니다.");
        assert!(panel.info().is_none());

        let panel = LocalityPanel::Info {
            location: seoul(),
            info: LocalityInfo::default(),
        };
        assert_eq!(panel.headline(), "📍 서울특별시 강남구");
        assert!(panel.info().is_some());

        assert_eq!(
            LocalityPanel::LocationUnavailable(LocationFailure::Geolocation).headline(),
            messages::GEOLOCATION_FAILED
        );
    }
}
