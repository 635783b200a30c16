// region:    --- Imports
use super::amount;
use crate::bidding::control::BidControl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Listing Model
pub type ListingId = i64;

/// 경매 상태 (Live -> Ended 단방향)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Live,
    Ended,
}

/// 최근 입찰 내역 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentBid {
    pub bidder: String,
    #[serde(deserialize_with = "amount::amount")]
    pub amount: f64,
}

/// 경매 상품 상태
/// 가격, 입찰자, 최소 입찰가, 최근 입찰 내역은 서버 응답으로만 갱신된다.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub end_at: DateTime<Utc>,
    pub current_price: String,
    pub current_bidder: Option<String>,
    pub min_next_bid: Option<f64>,
    /// 최신 입찰이 앞쪽
    pub recent_bids: Vec<RecentBid>,
    pub status: ListingStatus,
}

impl Listing {
    pub fn new(id: ListingId, end_at: DateTime<Utc>) -> Self {
        Self {
            id,
            end_at,
            current_price: String::new(),
            current_bidder: None,
            min_next_bid: None,
            recent_bids: Vec::new(),
            status: ListingStatus::Live,
        }
    }
}
// endregion: --- Listing Model

// region:    --- Card View
/// 상태 배지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Live,
    Ended,
}

/// 카운트다운 표시
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountdownView {
    pub text: String,
    pub urgent: bool,
}

pub const ENDED_TEXT: &str = "Ended";

pub fn min_bid_placeholder(min_next_bid: f64) -> String {
    format!("${min_next_bid}+")
}

pub fn min_bid_hint(min_next_bid: f64) -> String {
    format!("Min bid: ${min_next_bid}")
}

/// 상품 카드 하나에 바인딩된 뷰 모델
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub listing: Listing,
    pub countdown: CountdownView,
    pub badge: Badge,
    pub control: BidControl,
    pub min_bid_hint: Option<String>,
}

impl ListingCard {
    pub fn new(listing: Listing) -> Self {
        let placeholder = listing
            .min_next_bid
            .map(min_bid_placeholder)
            .unwrap_or_default();
        let mut card = Self {
            min_bid_hint: listing.min_next_bid.map(min_bid_hint),
            countdown: CountdownView::default(),
            badge: Badge::Live,
            control: BidControl::new(placeholder),
            listing,
        };
        if card.is_ended() {
            card.render_ended();
        }
        card
    }

    pub fn id(&self) -> ListingId {
        self.listing.id
    }

    pub fn is_ended(&self) -> bool {
        self.listing.status == ListingStatus::Ended
    }

    /// Live -> Ended 전환
    /// 이미 종료된 카드면 아무것도 바꾸지 않고 false 반환
    pub fn end(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.listing.status = ListingStatus::Ended;
        self.render_ended();
        true
    }

    fn render_ended(&mut self) {
        self.countdown = CountdownView {
            text: ENDED_TEXT.to_string(),
            urgent: false,
        };
        self.control.freeze();
        self.badge = Badge::Ended;
    }
}
// endregion: --- Card View
