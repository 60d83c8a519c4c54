//! Toast messages
//!
//! Short-lived messages drawn in the top-right corner. Every toast gets the
//! queue's time-to-live when it is pushed and is pruned on the next tick
//! after it expires.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Palette;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn color(self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A queued message
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    /// Whether the toast should no longer be shown at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// FIFO of visible toasts
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl ToastQueue {
    /// Create an empty queue whose toasts live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            expires_at: Instant::now() + self.ttl,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Drop every toast that has expired by `now`
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// Oldest toast still visible
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    /// Most recently pushed toast
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Draws a single toast
pub struct ToastWidget<'a> {
    toast: &'a Toast,
    palette: &'a Palette,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, palette: &'a Palette) -> Self {
        Self { toast, palette }
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.toast.kind.color();
        Clear.render(area, buf);

        Paragraph::new(self.toast.message.as_str())
            .style(Style::default().fg(self.palette.foreground))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", self.toast.kind.label()))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(self.palette.background)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order() {
        let mut queue = ToastQueue::default();
        assert!(queue.is_empty());

        queue.info("First");
        queue.error("Please fill in all fields");

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
        let latest = queue.latest().unwrap();
        assert_eq!(latest.kind, ToastKind::Error);
        assert_eq!(latest.kind.color(), Color::Red);
    }

    #[test]
    fn test_prune_uses_ttl() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        queue.success("Expense added successfully");
        let pushed = Instant::now();

        queue.prune(pushed);
        assert_eq!(queue.len(), 1);

        queue.prune(pushed + Duration::from_secs(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut queue = ToastQueue::new(Duration::ZERO);
        queue.info("gone");
        queue.prune(Instant::now());
        assert!(queue.is_empty());
    }
}
