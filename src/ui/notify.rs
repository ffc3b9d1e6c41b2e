//! Transient notifications ("toasts").
//!
//! A loading toast stays up until its request resolves; `success`/`failure` then
//! replace it in place under the same id, so one request never shows two toasts.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub icon: Option<&'static str>,
    /// None while loading.
    pub expires_at: Option<Instant>,
}

pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    pub fn visible(&self) -> &[Toast] {
        &self.items
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|toast| toast.id == id)
    }

    pub fn loading(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Loading, message.into(), None)
    }

    pub fn info(&mut self, message: impl Into<String>, icon: &'static str) -> ToastId {
        self.push(ToastKind::Info, message.into(), Some(icon))
    }

    /// Standalone failure toast, not tied to a loading one.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Failure, message.into(), None)
    }

    pub fn success(&mut self, id: ToastId, message: impl Into<String>) {
        self.resolve(id, ToastKind::Success, message.into());
    }

    pub fn failure(&mut self, id: ToastId, message: impl Into<String>) {
        self.resolve(id, ToastKind::Failure, message.into());
    }

    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        self.items
            .retain(|toast| toast.expires_at.map_or(true, |at| at > now));
    }

    fn push(&mut self, kind: ToastKind, message: String, icon: Option<&'static str>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let expires_at = (kind != ToastKind::Loading).then(|| Instant::now() + self.ttl);
        self.items.push(Toast {
            id,
            kind,
            message,
            icon,
            expires_at,
        });
        id
    }

    /// Replace the toast with `id`. If it was already pruned, show a fresh one.
    fn resolve(&mut self, id: ToastId, kind: ToastKind, message: String) {
        let expires_at = Some(Instant::now() + self.ttl);
        match self.items.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message;
                toast.expires_at = expires_at;
            }
            None => {
                self.items.push(Toast {
                    id,
                    kind,
                    message,
                    icon: None,
                    expires_at,
                });
            }
        }
    }
}
