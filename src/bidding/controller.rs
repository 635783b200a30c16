/// 입찰 처리 흐름
/// 1. 입력 검증
/// 2. 버튼/입력창 비활성화
/// 3. 입찰 서버 호출
/// 4. 응답 반영 또는 실패 복구
// region:    --- Imports
use super::error::BidError;
use super::model::{BidReceipt, BidRequest, BidResponse, Key};
use super::transport::BidTransport;
use crate::clock::Clock;
use crate::listing::model::{min_bid_hint, min_bid_placeholder};
use crate::listing::{ListingCard, ListingId, ListingRegistry};
use crate::notification::{NotificationKind, NotificationService};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

// endregion: --- Imports

// region:    --- Messages
pub const SUCCESS_REVERT_MS: i64 = 2000;

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid bid amount.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const DEFAULT_REJECT_MESSAGE: &str = "Bid failed";
pub const ENDED_MESSAGE: &str = "This auction has ended.";
pub const UNKNOWN_LISTING_MESSAGE: &str = "This listing is no longer available.";
pub const IN_FLIGHT_MESSAGE: &str = "Your previous bid is still being placed.";

// endregion: --- Messages

// region:    --- Bid Controller
/// 입찰 금액 파싱 (유한한 양수만 허용)
pub fn parse_amount(raw: &str) -> Result<f64, BidError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| BidError::InvalidAmount(raw.to_string()))
}

/// 성공 응답을 카드에 반영
/// 응답에 있는 필드만 덮어쓰고, 하나의 잠금 안에서 한 번에 적용한다.
pub fn reconcile(card: &mut ListingCard, response: &BidResponse, revert_at: DateTime<Utc>) {
    let listing = &mut card.listing;
    if let Some(price) = &response.new_price {
        listing.current_price = price.clone();
    }
    if let Some(bidder) = &response.bidder {
        listing.current_bidder = Some(bidder.clone());
    }
    if let Some(ends_at) = response.ends_at {
        listing.end_at = ends_at;
    }
    if let Some(min_next_bid) = response.min_next_bid {
        listing.min_next_bid = Some(min_next_bid);
        card.min_bid_hint = Some(min_bid_hint(min_next_bid));
        card.control.placeholder = min_bid_placeholder(min_next_bid);
    }
    if let Some(recent_bids) = &response.recent_bids {
        card.listing.recent_bids = recent_bids.clone();
    }

    card.control.input_value.clear();
    card.control.mark_success(revert_at);
}

pub struct BidController {
    registry: Arc<ListingRegistry>,
    transport: Arc<dyn BidTransport>,
    notifications: Arc<NotificationService>,
    clock: Arc<dyn Clock>,
}

impl BidController {
    pub fn new(
        registry: Arc<ListingRegistry>,
        transport: Arc<dyn BidTransport>,
        notifications: Arc<NotificationService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            transport,
            notifications,
            clock,
        }
    }

    /// 입찰
    pub async fn submit_bid(
        &self,
        listing_id: ListingId,
        raw_amount: &str,
    ) -> Result<BidReceipt, BidError> {
        info!(
            "{:<12} --> 입찰 요청 처리 시작: id={}, amount={:?}",
            "Bidding", listing_id, raw_amount
        );

        let Some(card) = self.registry.get(listing_id) else {
            return Err(self.fail(
                BidError::UnknownListing(listing_id),
                UNKNOWN_LISTING_MESSAGE,
            ));
        };

        let amount = match parse_amount(raw_amount) {
            Ok(amount) => amount,
            Err(e) => return Err(self.fail(e, INVALID_AMOUNT_MESSAGE)),
        };

        // 같은 컨트롤에서 중복 제출 방지
        {
            let mut card = card.lock();
            if card.is_ended() {
                drop(card);
                return Err(self.fail(BidError::ListingEnded(listing_id), ENDED_MESSAGE));
            }
            if !card.control.begin_submit() {
                drop(card);
                return Err(self.fail(
                    BidError::AlreadySubmitting(listing_id),
                    IN_FLIGHT_MESSAGE,
                ));
            }
        }

        let request = BidRequest {
            item_id: listing_id,
            amount,
        };
        let result = self.transport.submit(&request).await;

        let mut card = card.lock();

        // 응답을 기다리는 동안 경매가 종료됐다면 아무것도 되살리지 않는다.
        if card.is_ended() {
            drop(card);
            warn!(
                "{:<12} --> 응답 대기 중 경매 종료, 응답 폐기 id: {}",
                "Bidding", listing_id
            );
            return Err(self.fail(BidError::ListingEnded(listing_id), ENDED_MESSAGE));
        }

        match result {
            Err(e) => {
                card.control.restore();
                drop(card);
                error!("{:<12} --> 입찰 요청 실패: {}", "Bidding", e);
                Err(self.fail(BidError::TransportFailure(e), NETWORK_ERROR_MESSAGE))
            }
            Ok(response) if !response.success => {
                card.control.restore();
                drop(card);
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECT_MESSAGE.to_string());
                info!("{:<12} --> 입찰 거절: {}", "Bidding", message);
                self.notifications.notify(&message, NotificationKind::Error);
                Err(BidError::ServerRejected(message))
            }
            Ok(response) => {
                let revert_at = self.clock.now() + Duration::milliseconds(SUCCESS_REVERT_MS);
                reconcile(&mut card, &response, revert_at);
                info!(
                    "{:<12} --> 입찰 성공: id={}, price={}, extended={}",
                    "Bidding", listing_id, card.listing.current_price, response.sniper_extended
                );
                Ok(BidReceipt {
                    item_id: listing_id,
                    amount,
                    new_end_at: response.ends_at,
                    sniper_extended: response.sniper_extended,
                    revert_at,
                })
            }
        }
    }

    /// 입력창 값 변경
    /// 비활성화된 입력창이거나 없는 상품이면 false
    pub fn set_input(&self, listing_id: ListingId, value: &str) -> bool {
        let Some(card) = self.registry.get(listing_id) else {
            return false;
        };
        let mut card = card.lock();
        if card.control.input_disabled {
            return false;
        }
        card.control.input_value = value.to_string();
        true
    }

    /// 입력창 키 입력, Enter 는 현재 입력값으로 입찰
    pub async fn on_key(
        &self,
        listing_id: ListingId,
        key: Key,
    ) -> Result<Option<BidReceipt>, BidError> {
        if key != Key::Enter {
            return Ok(None);
        }
        let raw = self
            .registry
            .get(listing_id)
            .map(|card| card.lock().control.input_value.clone())
            .unwrap_or_default();
        self.submit_bid(listing_id, &raw).await.map(Some)
    }

    /// 성공 표시 시간이 지난 컨트롤을 Idle 로 복구
    pub fn settle(&self) -> usize {
        let now = self.clock.now();
        let mut settled = 0;
        for card in self.registry.cards() {
            let mut card = card.lock();
            if card.control.settle(now) {
                debug!("{:<12} --> 입찰 버튼 복구 id: {}", "Bidding", card.id());
                settled += 1;
            }
        }
        settled
    }

    fn fail(&self, err: BidError, message: &str) -> BidError {
        self.notifications.notify(message, NotificationKind::Error);
        err
    }
}
// endregion: --- Bid Controller

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_only_positive_numbers() {
        assert_eq!(parse_amount(" 50 ").unwrap(), 50.0);
        assert_eq!(parse_amount("12.75").unwrap(), 12.75);

        for raw in ["", "abc", "0", "-5", "NaN", "inf", "12abc"] {
            assert!(
                matches!(parse_amount(raw), Err(BidError::InvalidAmount(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
