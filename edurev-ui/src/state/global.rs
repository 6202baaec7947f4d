//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use edurev::portal::Notice;

use super::data::DataSource;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Notice currently on screen
    pub notice: RwSignal<Option<Notice>>,
    /// Incremented per notice so an older timeout cannot clear a newer one
    notice_seq: RwSignal<u64>,
    /// Mobile navigation menu open
    pub menu_open: RwSignal<bool>,
    /// Where dashboard data comes from
    pub data_source: RwSignal<DataSource>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(DataSource::detect()));
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    pub fn new(data_source: DataSource) -> Self {
        Self {
            notice: create_rw_signal(None),
            notice_seq: create_rw_signal(0),
            menu_open: create_rw_signal(false),
            data_source: create_rw_signal(data_source),
        }
    }

    /// Show a notice (auto-clears after its kind's display time)
    pub fn notify(&self, notice: Notice) {
        let display_ms = notice.kind.display_ms();
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notice.set(Some(notice));

        let notice_signal = self.notice;
        let seq_signal = self.notice_seq;
        gloo_timers::callback::Timeout::new(display_ms, move || {
            if seq_signal.get_untracked() == seq {
                notice_signal.set(None);
            }
        })
        .forget();
    }

    /// Dismiss the current notice
    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }
}
