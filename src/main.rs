// region:    --- Imports
use auction_live_client::bidding::{HttpBidTransport, Key};
use auction_live_client::clock::SystemClock;
use auction_live_client::config::ClientConfig;
use auction_live_client::page::{AuctionPage, PageSnapshot};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    info!("{:<12} --> 설정: {:?}", "Main", config);

    // 페이지 스냅샷 로드
    let snapshot = match PageSnapshot::from_file(&config.listings_path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("{:<12} --> 페이지 스냅샷 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    let transport = Arc::new(HttpBidTransport::new(&config.base_url));
    let page = Arc::new(AuctionPage::new(&config, Arc::new(SystemClock), transport));
    page.load(snapshot);
    page.start();

    // 한 줄 = "<id> <amount>" 입력 후 Enter
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "show" => show(&page),
            _ => {
                let mut parts = line.splitn(2, char::is_whitespace);
                let id = parts.next().and_then(|id| id.parse::<i64>().ok());
                let amount = parts.next().unwrap_or("").trim().to_string();
                let Some(id) = id else {
                    warn!("{:<12} --> 형식: <id> <amount> | show | quit", "Main");
                    continue;
                };

                let controller = page.controller();
                if !controller.set_input(id, &amount) {
                    warn!("{:<12} --> 입력할 수 없는 상품입니다. id: {}", "Main", id);
                    continue;
                }
                tokio::spawn(async move {
                    if let Err(e) = controller.on_key(id, Key::Enter).await {
                        warn!("{:<12} --> 입찰 실패: {}", "Main", e);
                    }
                });
            }
        }
    }

    page.stop();
    Ok(())
}

fn show(page: &AuctionPage) {
    for id in page.registry().ids() {
        if let Some(card) = page.card(id) {
            info!(
                "{:<12} --> #{} [{:?}] {}{} | price={} bidder={} | {} ({})",
                "Page",
                id,
                card.badge,
                card.countdown.text,
                if card.countdown.urgent { " !" } else { "" },
                card.listing.current_price,
                card.listing.current_bidder.as_deref().unwrap_or("-"),
                card.control.label,
                card.control.placeholder,
            );
        }
    }
    for notification in page.notifications().entries() {
        info!(
            "{:<12} --> [{:?}] {}",
            "Page", notification.kind, notification.message
        );
    }
}
// endregion: --- Main
