/// 입찰 버튼/입력창 상태 머신
/// Idle -> Submitting -> { Succeeded(일시) -> Idle | 실패 -> Idle }
/// 종료(freeze)는 어느 상태에서든 우선하며 되돌릴 수 없다.
// region:    --- Imports
use chrono::{DateTime, Utc};

// endregion: --- Imports

// region:    --- Labels
pub const DEFAULT_LABEL: &str = "Place Bid";
pub const SUBMITTING_LABEL: &str = "Bidding...";
pub const SUCCESS_LABEL: &str = "Bid Placed!";
pub const ENDED_LABEL: &str = "Auction Ended";

// endregion: --- Labels

// region:    --- Bid Control
/// 복구용으로 기억해 두는 컨트롤 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub label: String,
    pub button_disabled: bool,
    pub input_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPhase {
    Idle,
    Submitting {
        restore: ControlSnapshot,
    },
    Succeeded {
        revert_at: DateTime<Utc>,
        restore: ControlSnapshot,
    },
    Frozen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidControl {
    pub label: String,
    pub button_disabled: bool,
    pub input_disabled: bool,
    pub input_value: String,
    pub placeholder: String,
    /// 입찰 성공 표시
    pub highlighted: bool,
    phase: ControlPhase,
}

impl BidControl {
    pub fn new(placeholder: String) -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            button_disabled: false,
            input_disabled: false,
            input_value: String::new(),
            placeholder,
            highlighted: false,
            phase: ControlPhase::Idle,
        }
    }

    pub fn phase(&self) -> &ControlPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ControlPhase::Idle
    }

    pub fn is_frozen(&self) -> bool {
        self.phase == ControlPhase::Frozen
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            label: self.label.clone(),
            button_disabled: self.button_disabled,
            input_disabled: self.input_disabled,
        }
    }

    /// Idle -> Submitting
    /// Idle 이 아니거나 버튼이 비활성이면 false
    pub fn begin_submit(&mut self) -> bool {
        if !self.is_idle() || self.button_disabled {
            return false;
        }
        let restore = self.snapshot();
        self.label = SUBMITTING_LABEL.to_string();
        self.button_disabled = true;
        self.input_disabled = true;
        self.phase = ControlPhase::Submitting { restore };
        true
    }

    /// Submitting -> Idle (실패 복구)
    pub fn restore(&mut self) {
        if let ControlPhase::Submitting { restore } = &self.phase {
            let restore = restore.clone();
            self.apply(restore);
        }
    }

    /// Submitting -> Succeeded, revert_at 이후 settle 에서 Idle 로 복구
    pub fn mark_success(&mut self, revert_at: DateTime<Utc>) {
        if let ControlPhase::Submitting { restore } = &self.phase {
            let restore = restore.clone();
            self.label = SUCCESS_LABEL.to_string();
            self.highlighted = true;
            self.phase = ControlPhase::Succeeded { revert_at, restore };
        }
    }

    /// 예약된 복구 시점이 지났으면 Idle 로 전환
    pub fn settle(&mut self, now: DateTime<Utc>) -> bool {
        match &self.phase {
            ControlPhase::Succeeded { revert_at, restore } if now >= *revert_at => {
                let restore = restore.clone();
                self.apply(restore);
                true
            }
            _ => false,
        }
    }

    /// 경매 종료: 영구 비활성화
    pub fn freeze(&mut self) {
        self.label = ENDED_LABEL.to_string();
        self.button_disabled = true;
        self.input_disabled = true;
        self.highlighted = false;
        self.phase = ControlPhase::Frozen;
    }

    fn apply(&mut self, restore: ControlSnapshot) {
        self.label = restore.label;
        self.button_disabled = restore.button_disabled;
        self.input_disabled = restore.input_disabled;
        self.highlighted = false;
        self.phase = ControlPhase::Idle;
    }
}
// endregion: --- Bid Control
