//! UI-facing feedback helpers for status and toasts.

use super::{CrossdeckApp, StatusMessage, ToastMessage, STATUS_TTL, TOAST_LIMIT, TOAST_TTL};
use crossdeck_core::SessionEvent;
use std::time::Instant;

impl CrossdeckApp {
    /// Sets the status banner message and mirrors it into the toast queue.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status = Some(StatusMessage {
            text: text.clone(),
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.push_toast(text);
    }

    fn push_toast(&mut self, text: String) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Turns session events into user-facing progress messages.
    pub(super) fn report_events(&mut self, events: Vec<SessionEvent>) {
        let mut message = None;
        for event in events {
            match event {
                SessionEvent::WordCompleted { .. } => {}
                SessionEvent::Progress { completed, total } => {
                    message = Some(format!("Solved {} of {} words", completed, total));
                }
                SessionEvent::PuzzleCompleted => {
                    message = Some("Puzzle complete!".to_string());
                }
            }
        }
        if let Some(message) = message {
            self.set_status(message);
        }
    }
}
