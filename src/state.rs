use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::SessionState;

const TOAST_DISMISS_MS: i32 = 4000;

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<SessionState>,
    pub toast: RwSignal<Option<String>>,
    toast_serial: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            toast: RwSignal::new(None),
            toast_serial: RwSignal::new(0),
        }
    }

    /// Show an auto-dismissing error toast. The serial keeps a dismiss timer
    /// from an earlier toast from clearing a newer one.
    pub fn show_error_toast(&self, msg: impl Into<String>) {
        let msg = msg.into();
        log::error!("{msg}");
        let serial = self.toast_serial.get_untracked() + 1;
        self.toast_serial.set(serial);
        self.toast.set(Some(msg));

        let state = *self;
        spawn_local(async move {
            let _ = crate::analysis::sleep_ms(TOAST_DISMISS_MS).await;
            if state.toast_serial.get_untracked() == serial {
                state.toast.set(None);
            }
        });
    }
}
