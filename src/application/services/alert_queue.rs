use std::collections::VecDeque;

use crate::domain::Alert;

/// Alerts waiting to be acknowledged, oldest first.
#[derive(Debug, Default)]
pub struct AlertQueue {
    queue: VecDeque<Alert>,
}

impl AlertQueue {
    /// Creates empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alert behind the ones already queued.
    pub fn push(&mut self, alert: Alert) {
        self.queue.push_back(alert);
    }

    /// Removes the alert currently shown.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.queue.pop_front()
    }

    /// Returns the alert currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    /// Returns number of queued alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether no alert is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_are_shown_in_order() {
        let mut alerts = AlertQueue::new();
        alerts.push(Alert::error("first"));
        alerts.push(Alert::success("second"));

        assert_eq!(alerts.current().unwrap().message, "first");
        alerts.dismiss();
        assert_eq!(alerts.current().unwrap().message, "second");
        alerts.dismiss();
        assert!(alerts.is_empty());
        assert!(alerts.dismiss().is_none());
    }
}
