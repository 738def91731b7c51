//! Application Context
//!
//! Shared state provided via Leptos Context API: active navigation tab and
//! the transient toast notification channel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast auto-dismiss delay
const TOAST_DISMISS_MS: u32 = 3000;

/// Severity of a toast notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Default,
    Destructive,
}

/// A transient notification banner
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
    /// Monotonic sequence so a newer toast outlives an older one's dismiss timer
    seq: u32,
}

/// Navigation tabs in the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Leads,
    Contacts,
    Companies,
    Deals,
    Calendar,
    Reports,
    Email,
    Settings,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active sidebar tab - read
    pub active_tab: ReadSignal<Tab>,
    /// Active sidebar tab - write
    set_active_tab: WriteSignal<Tab>,
    /// Current toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new(
        active_tab: (ReadSignal<Tab>, WriteSignal<Tab>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    pub fn switch_tab(&self, tab: Tab) {
        self.set_active_tab.set(tab);
    }

    /// Show a transient notification; it dismisses itself after a fixed delay
    pub fn notify(&self, message: impl Into<String>, severity: ToastSeverity) {
        let seq = self
            .toast
            .get_untracked()
            .map(|t| t.seq.wrapping_add(1))
            .unwrap_or(0);
        self.set_toast.set(Some(Toast {
            message: message.into(),
            severity,
            seq,
        }));

        let set_toast = self.set_toast;
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            // Only dismiss if no newer toast replaced this one
            if toast.get_untracked().map(|t| t.seq) == Some(seq) {
                set_toast.set(None);
            }
        });
    }
}

/// Get the app context, panicking with a clear message if missing
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
