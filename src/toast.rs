use std::time::{Duration, Instant};

pub const PASS_TOAST: Duration = Duration::from_secs(2);
pub const ERROR_TOAST: Duration = Duration::from_secs(3);
pub const REWIND_TOAST: Duration = Duration::from_secs(3);
pub const APPLY_TOAST: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Single-slot transient notification. A new `show` replaces whatever is
/// currently visible along with its expiry; there is no queue.
pub struct ToastChannel {
    current: Option<(Toast, Instant)>,
}

impl ToastChannel {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, ttl: Duration, now: Instant) {
        self.current = Some((
            Toast {
                message: message.into(),
                kind,
            },
            now + ttl,
        ));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the toast once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.current {
            if now >= *deadline {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_its_ttl() {
        let start = Instant::now();
        let mut toasts = ToastChannel::new();
        toasts.show("Job passed", ToastKind::Success, PASS_TOAST, start);

        toasts.tick(start + Duration::from_millis(1999));
        assert!(toasts.current().is_some());

        toasts.tick(start + Duration::from_secs(2));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_show_replaces_current_toast_and_timer() {
        let start = Instant::now();
        let mut toasts = ToastChannel::new();
        toasts.show("first", ToastKind::Success, PASS_TOAST, start);

        // A second show just before the first expires discards the first
        // and restarts the clock.
        let later = start + Duration::from_millis(1900);
        toasts.show("second", ToastKind::Error, ERROR_TOAST, later);

        toasts.tick(start + Duration::from_secs(2));
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);

        toasts.tick(later + ERROR_TOAST);
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_dismiss_clears_immediately() {
        let start = Instant::now();
        let mut toasts = ToastChannel::new();
        toasts.show("bye", ToastKind::Success, APPLY_TOAST, start);
        toasts.dismiss();
        assert!(toasts.current().is_none());
    }
}
