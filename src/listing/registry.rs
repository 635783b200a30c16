/// 상품 id -> 카드 뷰 모델 레지스트리
/// 페이지 초기화 시 한 번 구성하고, 스케줄러와 입찰 컨트롤러에 명시적으로 전달한다.
// region:    --- Imports
use super::model::{ListingCard, ListingId};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

// endregion: --- Imports

// region:    --- Listing Registry
pub type SharedCard = Arc<Mutex<ListingCard>>;

#[derive(Debug, Default)]
pub struct ListingRegistry {
    cards: RwLock<BTreeMap<ListingId, SharedCard>>,
}

impl ListingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// 카드 등록
    /// 이미 등록된 id면 기존 카드를 그대로 돌려준다.
    pub fn insert(&self, card: ListingCard) -> SharedCard {
        let id = card.id();
        let mut cards = self.cards.write();
        if let Some(existing) = cards.get(&id) {
            warn!("{:<12} --> 이미 등록된 상품입니다. id: {}", "Registry", id);
            return Arc::clone(existing);
        }
        debug!("{:<12} --> 상품 등록 id: {}", "Registry", id);
        let shared = Arc::new(Mutex::new(card));
        cards.insert(id, Arc::clone(&shared));
        shared
    }

    pub fn get(&self, id: ListingId) -> Option<SharedCard> {
        self.cards.read().get(&id).cloned()
    }

    /// 현재 카드 상태 복사본
    pub fn snapshot(&self, id: ListingId) -> Option<ListingCard> {
        self.get(id).map(|card| card.lock().clone())
    }

    /// 등록된 카드 목록 (id 순)
    pub fn cards(&self) -> Vec<SharedCard> {
        self.cards.read().values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<ListingId> {
        self.cards.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.cards.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.read().is_empty()
    }
}
// endregion: --- Listing Registry
