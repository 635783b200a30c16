use crate::listing::{amount, ListingId, RecentBid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 요청 (본문에는 amount 만 실린다)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidRequest {
    #[serde(skip)]
    pub item_id: ListingId,
    pub amount: f64,
}

// 입찰 응답
// 서버가 다시 계산한 필드만 채워진다 (ends_at 은 연장이 일어난 경우에만).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BidResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "amount::optional_display")]
    pub new_price: Option<String>,
    #[serde(default)]
    pub bidder: Option<String>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "amount::optional_amount")]
    pub min_next_bid: Option<f64>,
    #[serde(default)]
    pub recent_bids: Option<Vec<RecentBid>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sniper_extended: bool,
}

// 입찰 성공 결과
#[derive(Debug, Clone, PartialEq)]
pub struct BidReceipt {
    pub item_id: ListingId,
    pub amount: f64,
    pub new_end_at: Option<DateTime<Utc>>,
    pub sniper_extended: bool,
    pub revert_at: DateTime<Utc>,
}

// 입찰 입력 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other(char),
}
