//! Transient toast notifications.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_TIMEOUT_MS: u32 = 6000;

/// Upper bound on simultaneously visible toasts; oldest are dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Neutral,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Neutral => "toast--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast stack, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastsState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Push a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
