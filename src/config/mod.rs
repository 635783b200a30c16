/// 클라이언트 설정
/// 환경 변수에서 읽고, 없으면 기본값을 사용한다.
// region:    --- Imports
use std::path::PathBuf;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Client Config
const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_LISTINGS_PATH: &str = "listings.json";
const DEFAULT_HOUSEKEEPING_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 입찰 서버 주소 (POST {base_url}/api/bid/{id})
    pub base_url: String,
    /// 페이지 스냅샷(JSON) 경로
    pub listings_path: PathBuf,
    /// 알림 만료 및 버튼 복구 주기
    pub housekeeping_period: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listings_path: PathBuf::from(DEFAULT_LISTINGS_PATH),
            housekeeping_period: Duration::from_millis(DEFAULT_HOUSEKEEPING_MS),
        }
    }
}

impl ClientConfig {
    /// 환경 변수로부터 설정 생성
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 조회 함수로부터 설정 생성
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("AUCTION_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let listings_path = lookup("AUCTION_LISTINGS")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.listings_path);

        let housekeeping_period = lookup("AUCTION_HOUSEKEEPING_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.housekeeping_period);

        Self {
            base_url,
            listings_path,
            housekeeping_period,
        }
    }
}
// endregion: --- Client Config
