/// 카운트다운 스케줄러
/// 등록된 모든 상품을 하나의 1초 주기 tick 으로 다시 계산한다. 상품별 타이머는 없다.
/// 남은 시간이 0 이하가 되면 상품을 종료 상태로 한 번만 전환한다.
// region:    --- Imports
use crate::clock::Clock;
use crate::listing::{Listing, ListingCard, ListingRegistry, SharedCard};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

pub mod format;

pub use format::{format_remaining, is_urgent, URGENT_THRESHOLD_MS};

// endregion: --- Imports

// region:    --- Countdown Scheduler
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// 카드 한 장에 대한 tick 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Rendered,
    Ended,
    Skipped,
}

/// tick 한 번의 결과 집계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub rendered: usize,
    pub ended: usize,
    pub skipped: usize,
}

/// 카드의 카운트다운 갱신
/// 종료된 카드는 다시 그리지 않는다.
pub fn refresh_card(card: &mut ListingCard, now: DateTime<Utc>) -> Refresh {
    if card.is_ended() {
        return Refresh::Skipped;
    }

    let remaining_ms = (card.listing.end_at - now).num_milliseconds();
    if remaining_ms <= 0 {
        card.end();
        return Refresh::Ended;
    }

    card.countdown.text = format_remaining(remaining_ms);
    card.countdown.urgent = is_urgent(remaining_ms);
    Refresh::Rendered
}

pub struct CountdownScheduler {
    registry: Arc<ListingRegistry>,
    clock: Arc<dyn Clock>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl CountdownScheduler {
    pub fn new(registry: Arc<ListingRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            handle: Mutex::new(None),
        }
    }

    /// 상품 등록 후 즉시 한 번 그린다.
    pub fn register(&self, listing: Listing) -> SharedCard {
        let card = self.registry.insert(ListingCard::new(listing));
        let outcome = refresh_card(&mut card.lock(), self.clock.now());
        if outcome == Refresh::Ended {
            info!("{:<12} --> 등록 시점에 이미 종료된 상품", "Scheduler");
        }
        card
    }

    /// 등록된 모든 상품의 남은 시간 재계산
    pub fn tick(&self) -> TickReport {
        let now = self.clock.now();
        let mut report = TickReport::default();

        for card in self.registry.cards() {
            let mut card = card.lock();
            match refresh_card(&mut card, now) {
                Refresh::Rendered => report.rendered += 1,
                Refresh::Ended => {
                    info!("{:<12} --> 경매 종료 id: {}", "Scheduler", card.id());
                    report.ended += 1;
                }
                Refresh::Skipped => report.skipped += 1,
            }
        }

        debug!("{:<12} --> tick 완료: {:?}", "Scheduler", report);
        report
    }

    /// 카운트다운 스케줄러 시작
    pub fn start(self: &Arc<Self>) {
        let mut handle = self.handle.lock();
        if handle.is_some() {
            return;
        }

        let scheduler = Arc::clone(self);
        *handle = Some(tokio::spawn(async move {
            let mut interval = interval(TICK_PERIOD); // 1초마다 실행
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                scheduler.tick();
            }
        }));
        info!("{:<12} --> 카운트다운 시작", "Scheduler");
    }

    /// 카운트다운 스케줄러 중지
    pub fn stop(&self) {
        if let Some(handle) = self.handle.lock().take() {
            handle.abort();
            info!("{:<12} --> 카운트다운 중지", "Scheduler");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.lock().is_some()
    }
}

// endregion: --- Countdown Scheduler
