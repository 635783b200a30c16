/// 입찰 서버 전송 계층
// region:    --- Imports
use super::error::TransportError;
use super::model::{BidRequest, BidResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Bid Transport Trait
/// 입찰 서버 호출 트레이트
#[async_trait]
pub trait BidTransport: Send + Sync {
    async fn submit(&self, request: &BidRequest) -> Result<BidResponse, TransportError>;
}

/// HTTP 구현체 (POST {base_url}/api/bid/{item_id})
pub struct HttpBidTransport {
    client: Client,
    base_url: String,
}

impl HttpBidTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn bid_url(&self, request: &BidRequest) -> String {
        format!("{}/api/bid/{}", self.base_url, request.item_id)
    }
}

#[async_trait]
impl BidTransport for HttpBidTransport {
    async fn submit(&self, request: &BidRequest) -> Result<BidResponse, TransportError> {
        let url = self.bid_url(request);
        info!("{:<12} --> 입찰 요청 전송: {}", "Transport", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // 거절 응답도 4xx 와 함께 JSON 본문으로 온다. 본문 해석 여부만 본다.
        let parsed: BidResponse = serde_json::from_slice(&body)?;
        debug!(
            "{:<12} --> 응답 수신: status={}, success={}",
            "Transport", status, parsed.success
        );
        Ok(parsed)
    }
}
// endregion: --- Bid Transport Trait
