use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Gauge, Widget},
};

use crate::search::Progress;

use super::theme::{ACCENT_PRIMARY, KEY_HINT_BG, TEXT_BRIGHT};

/// `Step k of n` gauge.
pub struct ProgressBar {
    progress: Progress,
}

impl ProgressBar {
    pub fn new(progress: Progress) -> Self {
        Self { progress }
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(KEY_HINT_BG))
            .label(Span::styled(
                self.progress.to_string(),
                Style::default().fg(TEXT_BRIGHT),
            ))
            .ratio(self.progress.ratio().clamp(0.0, 1.0))
            .render(area, buf);
    }
}
