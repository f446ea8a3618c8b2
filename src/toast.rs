//! User-visible notifications
//!
//! The generator workflow and the contact form only need somewhere to push
//! `{title, description, variant}` triples. The terminal UI drains them
//! through [`ToastQueue`], tests usually collect them into a `Vec<Toast>`.

use serde::{Deserialize, Serialize};

/// Number of animation ticks a toast stays on screen (ticks are 300ms)
pub const TOAST_LIFETIME_TICKS: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Anything that can receive notifications
pub trait ToastSink {
    fn push(&mut self, toast: Toast);
}

impl ToastSink for Vec<Toast> {
    fn push(&mut self, toast: Toast) {
        Vec::push(self, toast);
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    ticks_left: u16,
}

/// Toasts currently on screen, newest last
#[derive(Debug)]
pub struct ToastQueue {
    active: Vec<ActiveToast>,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            active: Vec::new(),
            max_visible: max_visible.max(1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|a| &a.toast)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for active in &mut self.active {
            active.ticks_left = active.ticks_left.saturating_sub(1);
        }
        self.active.retain(|a| a.ticks_left > 0);
    }

    /// Dismiss the oldest toast
    pub fn dismiss(&mut self) {
        if !self.active.is_empty() {
            self.active.remove(0);
        }
    }
}

impl ToastSink for ToastQueue {
    fn push(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, variant = ?toast.variant, "toast");
        self.active.push(ActiveToast {
            toast,
            ticks_left: TOAST_LIFETIME_TICKS,
        });
        if self.active.len() > self.max_visible {
            let overflow = self.active.len() - self.max_visible;
            self.active.drain(..overflow);
        }
    }
}
