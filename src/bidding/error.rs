use crate::listing::ListingId;
use thiserror::Error;

/// 전송 단계 오류 (요청 실패 또는 응답 해석 실패)
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum BidError {
    #[error("invalid bid amount: {0:?}")]
    InvalidAmount(String),
    #[error("listing {0} is not on this page")]
    UnknownListing(ListingId),
    #[error("listing {0} has ended")]
    ListingEnded(ListingId),
    #[error("a bid for listing {0} is already in flight")]
    AlreadySubmitting(ListingId),
    #[error("bid rejected: {0}")]
    ServerRejected(String),
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),
}
