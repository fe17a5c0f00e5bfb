//! Combined locality-rules + guide payload.
//!
//! The two halves are decoded independently: a broken `location_info`
//! must not hide the guide, and a broken guide must not hide the rules.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::guide::GuideData;
use crate::locality::LocalityInfo;
use crate::navigator::GuideFailure;

/// Body of `POST /get-recycle-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleInfoRequest {
    pub city: String,
    #[serde(rename = "districtKey")]
    pub district_key: String,
}

/// Raw response; each half is validated separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecycleInfoResponse {
    #[serde(default)]
    pub location_info: Value,
    #[serde(default)]
    pub guide_data: Value,
}

/// Validated combined result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecycleInfo {
    /// `None` means the backend has no rules for the locality.
    pub location_info: Option<LocalityInfo>,
    pub guide: Result<GuideData, GuideFailure>,
}

impl RecycleInfo {
    pub fn from_response(response: RecycleInfoResponse) -> Self {
        Self {
            location_info: decode_locality(response.location_info),
            guide: decode_guide(response.guide_data),
        }
    }

    /// Assemble a result from the legacy static files.
    ///
    /// `all_localities` is `{ city: { districtKey: LocalityInfo } }`.
    /// Either half may be `None` when its file could not be fetched.
    pub fn from_legacy(
        all_localities: Option<Value>,
        guide: Option<Value>,
        city: &str,
        district_key: &str,
    ) -> Self {
        let location_info = all_localities
            .and_then(|v| {
                match serde_json::from_value::<BTreeMap<String, BTreeMap<String, Value>>>(v) {
                    Ok(map) => Some(map),
                    Err(e) => {
                        warn!("Discarding malformed legacy locality table: {}", e);
                        None
                    }
                }
            })
            .and_then(|mut cities| cities.remove(city))
            .and_then(|mut districts| districts.remove(district_key))
            .and_then(decode_locality);

        Self {
            location_info,
            guide: guide.map_or(Err(GuideFailure::LoadFailed), decode_guide),
        }
    }
}

fn decode_locality(value: Value) -> Option<LocalityInfo> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Discarding malformed location_info: {}", e);
            None
        }
    }
}

fn decode_guide(value: Value) -> Result<GuideData, GuideFailure> {
    if value.is_null() {
        return Err(GuideFailure::LoadFailed);
    }
    GuideData::from_value(value).ok_or(GuideFailure::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guide_json() -> Value {
        json!({"categories": [{"name": "플라스틱", "icon": "🧴", "items": []}]})
    }

    #[test]
    fn test_null_location_keeps_guide() {
        let response: RecycleInfoResponse = serde_json::from_value(json!({
            "location_info": null,
            "guide_data": guide_json()
        }))
        .unwrap();
        let info = RecycleInfo::from_response(response);
        assert!(info.location_info.is_none());
        assert_eq!(info.guide.unwrap().categories.len(), 1);
    }

    #[test]
    fn test_malformed_guide_keeps_location() {
        let response: RecycleInfoResponse = serde_json::from_value(json!({
            "location_info": {"배출시간": "매일", "재활용품": {}, "봉투색상": {}},
            "guide_data": {"sections": []}
        }))
        .unwrap();
        let info = RecycleInfo::from_response(response);
        assert_eq!(info.location_info.unwrap().discharge_time, "매일");
        assert_eq!(info.guide, Err(GuideFailure::Malformed));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let response: RecycleInfoResponse = serde_json::from_value(json!({})).unwrap();
        let info = RecycleInfo::from_response(response);
        assert!(info.location_info.is_none());
        assert_eq!(info.guide, Err(GuideFailure::LoadFailed));
    }

    #[test]
    fn test_legacy_lookup() {
        let table = json!({
            "서울특별시": {
                "강남구": {"배출시간": "월~금 오후 8시 ~ 오전 5시", "재활용품": {}, "봉투색상": {}}
            }
        });
        let info = RecycleInfo::from_legacy(Some(table.clone()), Some(guide_json()), "서울특별시", "강남구");
        assert!(info.location_info.is_some());
        assert!(info.guide.is_ok());

        let missing = RecycleInfo::from_legacy(Some(table), None, "서울특별시", "서초구");
        assert!(missing.location_info.is_none());
        assert_eq!(missing.guide, Err(GuideFailure::LoadFailed));
    }

    #[test]
    fn test_request_uses_camel_case_key() {
        let req = RecycleInfoRequest {
            city: "서울특별시".to_string(),
            district_key: "강남구".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"city": "서울특별시", "districtKey": "강남구"})
        );
    }
}
