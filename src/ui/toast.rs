//! Transient notifications shown over the board

use std::time::{Duration, Instant};

use egui::{Align2, Context, CornerRadius, Frame, RichText};

use super::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
}

/// A message that hides itself after `duration`
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message, ToastKind::Error, duration)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Draw anchored to the bottom of the window
    pub fn show(&self, ctx: &Context) {
        let fill = match self.kind {
            ToastKind::Error => TOAST_ERROR_BG,
            ToastKind::Info => TOAST_INFO_BG,
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .show(ctx, |ui| {
                Frame::new()
                    .fill(fill)
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&self.message).size(14.0).color(TEXT_PRIMARY));
                    });
            });
    }
}
