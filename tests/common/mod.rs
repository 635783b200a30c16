#![allow(dead_code)]

use async_trait::async_trait;
use auction_live_client::bidding::{BidRequest, BidResponse, BidTransport, TransportError};
use auction_live_client::clock::{Clock, ManualClock};
use auction_live_client::listing::{Listing, ListingId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(epoch()))
}

pub fn as_clock(clock: &Arc<ManualClock>) -> Arc<dyn Clock> {
    Arc::clone(clock) as Arc<dyn Clock>
}

/// 지금부터 ms 후에 끝나는 상품
pub fn listing_ending_in(id: ListingId, now: DateTime<Utc>, ms: i64) -> Listing {
    Listing {
        current_price: "$40.00".to_string(),
        current_bidder: Some("bob".to_string()),
        min_next_bid: Some(40.0),
        ..Listing::new(id, now + Duration::milliseconds(ms))
    }
}

pub enum Scripted {
    Respond(BidResponse),
    Fail(String),
}

/// 미리 정해 둔 응답을 순서대로 돌려주는 전송 계층
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<BidRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<BidRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl BidTransport for ScriptedTransport {
    async fn submit(&self, request: &BidRequest) -> Result<BidResponse, TransportError> {
        self.requests.lock().push(request.clone());
        match self.script.lock().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(reason)) => Err(TransportError::Unavailable(reason)),
            None => Err(TransportError::Unavailable("no scripted response".to_string())),
        }
    }
}

/// 테스트가 응답을 풀어줄 때까지 대기하는 전송 계층
pub struct GatedTransport {
    gate: Mutex<Option<oneshot::Receiver<Result<BidResponse, String>>>>,
    requests: Mutex<Vec<BidRequest>>,
}

impl GatedTransport {
    pub fn new() -> (Arc<Self>, oneshot::Sender<Result<BidResponse, String>>) {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
            requests: Mutex::new(Vec::new()),
        });
        (transport, tx)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl BidTransport for GatedTransport {
    async fn submit(&self, request: &BidRequest) -> Result<BidResponse, TransportError> {
        self.requests.lock().push(request.clone());
        let gate = self.gate.lock().take();
        let Some(gate) = gate else {
            return Err(TransportError::Unavailable("gate already used".to_string()));
        };
        match gate.await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(reason)) => Err(TransportError::Unavailable(reason)),
            Err(_) => Err(TransportError::Unavailable("gate dropped".to_string())),
        }
    }
}

pub fn accepted(new_price: &str, bidder: &str) -> BidResponse {
    BidResponse {
        success: true,
        new_price: Some(new_price.to_string()),
        bidder: Some(bidder.to_string()),
        ..BidResponse::default()
    }
}

pub fn rejected(message: Option<&str>) -> BidResponse {
    BidResponse {
        success: false,
        message: message.map(str::to_string),
        ..BidResponse::default()
    }
}
