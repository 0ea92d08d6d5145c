use crate::global_signals;
use derive_more::Display;
use leptos::*;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Severity of a toast notification, named after its CSS class suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToastVariant {
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
    #[display(fmt = "warning")]
    Warning,
    #[display(fmt = "info")]
    Info,
}

/// One transient, dismissible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

pub struct Globals {
    pub toasts: RwSignal<Vec<Toast>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();
static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { toasts: create_rw_signal(Vec::new()) })
}

global_signals! {
    pub toasts => toasts: Vec<Toast>,
}

/// Queue a toast; it stays up until dismissed.
pub fn show_toast(title: &str, message: &str, variant: ToastVariant) {
    let toast = Toast {
        id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
        title: title.to_string(),
        message: message.to_string(),
        variant,
    };
    toasts().update(|queue| queue.push(toast));
}

pub fn dismiss_toast(id: u64) {
    toasts().update(|queue| queue.retain(|t| t.id != id));
}
