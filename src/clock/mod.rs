/// 현재 시각 공급자
/// 카운트다운, 알림 만료, 입찰 버튼 복구 시점은 모두 Clock 기준으로 계산한다.
// region:    --- Imports
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

// endregion: --- Imports

// region:    --- Clock
/// 시각 공급자 트레이트
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 실제 시스템 시각
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 테스트용 수동 시각
/// advance/set 으로만 시간이 흐른다.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// 시각을 앞으로 이동
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = *now + by;
    }

    /// 시각을 지정한 값으로 설정
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
// endregion: --- Clock
