use std::collections::VecDeque;

use itertools::Itertools as _;

use super::Draggable;

impl<E> Draggable<E> {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    pub(super) fn debug_integrity_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_integrity {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    pub(super) fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity_clamped();
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[event {}] {}", self.event_serial, message));
    }

    /// Recorded debug lines, oldest first. Empty unless `debug_event_log` or `debug_integrity`
    /// is enabled.
    pub fn debug_log(&self) -> &VecDeque<String> {
        &self.debug_log
    }

    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
