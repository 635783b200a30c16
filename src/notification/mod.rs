/// 화면 알림 큐
/// 알림은 쌓이기만 하고 합쳐지지 않는다. 각 항목은 3초 표시 후 0.3초 동안 사라진 뒤 제거된다.
// region:    --- Imports
use crate::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

// endregion: --- Imports

// region:    --- Notification Model
pub const VISIBLE_MS: i64 = 3000;
pub const FADE_MS: i64 = 300;

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub phase: NotificationPhase,
}

impl Notification {
    fn fade_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(VISIBLE_MS)
    }

    fn remove_at(&self) -> DateTime<Utc> {
        self.fade_at() + Duration::milliseconds(FADE_MS)
    }
}
// endregion: --- Notification Model

// region:    --- Notification Service
#[derive(Debug, Default)]
struct Queue {
    next_id: NotificationId,
    entries: Vec<Notification>,
}

pub struct NotificationService {
    clock: Arc<dyn Clock>,
    queue: Mutex<Queue>,
}

impl NotificationService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            queue: Mutex::new(Queue::default()),
        }
    }

    pub fn new_shared(clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self::new(clock))
    }

    /// 알림 추가
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let message = message.into();
        match kind {
            NotificationKind::Error => warn!("{:<12} --> {}", "Notify", message),
            _ => info!("{:<12} --> {}", "Notify", message),
        }

        let mut queue = self.queue.lock();
        queue.next_id += 1;
        let id = queue.next_id;
        queue.entries.push(Notification {
            id,
            message,
            kind,
            created_at: self.clock.now(),
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// 사용자가 닫은 알림 즉시 제거
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut queue = self.queue.lock();
        let before = queue.entries.len();
        queue.entries.retain(|n| n.id != id);
        before != queue.entries.len()
    }

    /// 시간 경과에 따른 전환 (Visible -> Fading -> 제거)
    /// 제거된 알림 id 목록 반환
    pub fn expire(&self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let mut queue = self.queue.lock();
        let mut removed = Vec::new();

        queue.entries.retain_mut(|entry| {
            if now >= entry.remove_at() {
                removed.push(entry.id);
                return false;
            }
            if now >= entry.fade_at() {
                entry.phase = NotificationPhase::Fading;
            }
            true
        });

        if !removed.is_empty() {
            debug!("{:<12} --> 만료된 알림 제거: {:?}", "Notify", removed);
        }
        removed
    }

    /// 현재 화면에 있는 알림 (추가 순)
    pub fn entries(&self) -> Vec<Notification> {
        self.queue.lock().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().entries.is_empty()
    }
}
// endregion: --- Notification Service
