//! Fixed user-facing strings.

use crate::location::ResolvedLocation;

pub const LOCALITY_PENDING: &str = "📍 위치 정보를 확인하는 중입니다...";
pub const GEOLOCATION_FAILED: &str = "📍 위치 정보를 가져올 수 없습니다.";
pub const REVERSE_GEOCODE_FAILED: &str = "📍 위치 API 호출 중 오류가 발생했습니다.";
pub const RECYCLE_INFO_FAILED: &str = "📍 분리수거 정보 로드 중 오류 발생.";

pub const GUIDE_LOAD_FAILED: &str = "가이드 정보를 불러오는데 실패했습니다.";
pub const GUIDE_MALFORMED: &str = "잘못된 가이드 데이터입니다.";
pub const GUIDE_PENDING: &str = "가이드 정보를 불러오는 중...";

pub const IMAGE_ONLY_PLACEHOLDER: &str = "이미지 분석 요청";
pub const CHAT_LOADING: &str = "🤖 답변을 준비하고 있습니다...";
pub const CHAT_NETWORK_ERROR: &str = "❌ 서버와 통신 중 문제가 발생했습니다.";

pub fn no_locality_data(location: &ResolvedLocation) -> String {
    format!("📍 {} 지역의 데이터가 없습니다.", location.display())
}

pub fn chat_server_error(error: &str) -> String {
    format!("❌ 오류: {error}")
}
