/// 경매 페이지 세션
/// 호스트 페이지의 카드 목록(스냅샷)을 읽어 레지스트리를 만들고,
/// 카운트다운 스케줄러와 정리 루프(알림 만료, 입찰 버튼 복구)를 돌린다.
// region:    --- Imports
use crate::bidding::{BidController, BidTransport};
use crate::clock::Clock;
use crate::config::ClientConfig;
use crate::listing::{
    amount, Listing, ListingCard, ListingId, ListingRegistry, ListingStatus, RecentBid,
};
use crate::notification::NotificationService;
use crate::scheduler::CountdownScheduler;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Page Snapshot
#[derive(Error, Debug)]
pub enum PageError {
    #[error("failed to read page snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid page snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// 카드 하나의 초기 상태
#[derive(Debug, Clone, Deserialize)]
pub struct CardSeed {
    pub id: ListingId,
    pub ends_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "amount::optional_display")]
    pub price: Option<String>,
    #[serde(default)]
    pub bidder: Option<String>,
    #[serde(default, deserialize_with = "amount::optional_amount")]
    pub min_next_bid: Option<f64>,
    #[serde(default)]
    pub recent_bids: Vec<RecentBid>,
    #[serde(default)]
    pub status: ListingStatus,
}

impl From<CardSeed> for Listing {
    fn from(seed: CardSeed) -> Self {
        Listing {
            id: seed.id,
            end_at: seed.ends_at,
            current_price: seed.price.unwrap_or_default(),
            current_bidder: seed.bidder,
            min_next_bid: seed.min_next_bid,
            recent_bids: seed.recent_bids,
            status: seed.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSnapshot {
    pub listings: Vec<CardSeed>,
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PageError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
// endregion: --- Page Snapshot

// region:    --- Auction Page
pub struct AuctionPage {
    registry: Arc<ListingRegistry>,
    scheduler: Arc<CountdownScheduler>,
    controller: Arc<BidController>,
    notifications: Arc<NotificationService>,
    housekeeping_period: Duration,
    housekeeping: Mutex<Option<JoinHandle<()>>>,
}

impl AuctionPage {
    pub fn new(
        config: &ClientConfig,
        clock: Arc<dyn Clock>,
        transport: Arc<dyn BidTransport>,
    ) -> Self {
        let registry = ListingRegistry::new_shared();
        let notifications = NotificationService::new_shared(Arc::clone(&clock));
        let scheduler = Arc::new(CountdownScheduler::new(
            Arc::clone(&registry),
            Arc::clone(&clock),
        ));
        let controller = Arc::new(BidController::new(
            Arc::clone(&registry),
            transport,
            Arc::clone(&notifications),
            clock,
        ));

        Self {
            registry,
            scheduler,
            controller,
            notifications,
            housekeeping_period: config.housekeeping_period,
            housekeeping: Mutex::new(None),
        }
    }

    /// 스냅샷의 모든 카드 등록
    pub fn load(&self, snapshot: PageSnapshot) -> usize {
        let count = snapshot.listings.len();
        for seed in snapshot.listings {
            self.scheduler.register(seed.into());
        }
        info!("{:<12} --> 상품 {}개 등록", "Page", count);
        count
    }

    /// 카운트다운과 정리 루프 시작
    pub fn start(&self) {
        self.scheduler.start();

        let mut housekeeping = self.housekeeping.lock();
        if housekeeping.is_some() {
            return;
        }
        let controller = Arc::clone(&self.controller);
        let notifications = Arc::clone(&self.notifications);
        let period = self.housekeeping_period;
        *housekeeping = Some(tokio::spawn(async move {
            let mut interval = interval(period);
            loop {
                interval.tick().await;
                notifications.expire();
                let settled = controller.settle();
                if settled > 0 {
                    debug!("{:<12} --> 입찰 버튼 {}개 복구", "Page", settled);
                }
            }
        }));
    }

    pub fn stop(&self) {
        self.scheduler.stop();
        if let Some(handle) = self.housekeeping.lock().take() {
            handle.abort();
        }
        info!("{:<12} --> 페이지 루프 중지", "Page");
    }

    pub fn registry(&self) -> Arc<ListingRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn scheduler(&self) -> Arc<CountdownScheduler> {
        Arc::clone(&self.scheduler)
    }

    pub fn controller(&self) -> Arc<BidController> {
        Arc::clone(&self.controller)
    }

    pub fn notifications(&self) -> Arc<NotificationService> {
        Arc::clone(&self.notifications)
    }

    pub fn card(&self, id: ListingId) -> Option<ListingCard> {
        self.registry.snapshot(id)
    }
}
// endregion: --- Auction Page
