//! Transient success notifications.
//!
//! A toast is shown, fades out, then is removed. Each phase lasts a fixed
//! delay; whoever owns the timer reports the delay elapsing with the toast id
//! and the toast list advances one step.

use std::time::Duration;

use crate::config::{TOAST_FADE_FOR, TOAST_VISIBLE_FOR};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastPhase {
    Visible,
    Fading,
}

impl ToastPhase {
    /// How long the toast stays in this phase.
    pub fn delay(self) -> Duration {
        match self {
            ToastPhase::Visible => TOAST_VISIBLE_FOR,
            ToastPhase::Fading => TOAST_FADE_FOR,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastPhase::Visible => "success-notification slide-in",
            ToastPhase::Fading => "success-notification slide-out",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub phase: ToastPhase,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u32,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Advances the toast with `id` one phase. Ids that are no longer present
    /// are ignored, so a timer outliving its toast does nothing.
    pub fn elapse(&mut self, id: u32) {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            return;
        };
        match self.items[pos].phase {
            ToastPhase::Visible => self.items[pos].phase = ToastPhase::Fading,
            ToastPhase::Fading => {
                self.items.remove(pos);
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
