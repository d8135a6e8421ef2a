use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::search::{Highlight, ViewModel};

use super::theme::{highlight_color, BORDER_DEFAULT, TEXT_BRIGHT, TEXT_MUTED};

/// Search statistics plus the color legend.
pub struct StatsPanel<'a> {
    view: &'a ViewModel,
    target: Option<i64>,
    speed: f64,
    playing: bool,
}

impl<'a> StatsPanel<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self {
            view,
            target: None,
            speed: 1.0,
            playing: false,
        }
    }

    pub fn target(mut self, target: Option<i64>) -> Self {
        self.target = target;
        self
    }

    pub fn playback(mut self, speed: f64, playing: bool) -> Self {
        self.speed = speed;
        self.playing = playing;
        self
    }

    fn row(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), Style::default().fg(TEXT_MUTED)),
            Span::styled(value, Style::default().fg(TEXT_BRIGHT)),
        ])
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let stats = &self.view.stats;
        let target = self
            .target
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        let playback = if self.playing { "playing" } else { "paused" };

        let mut lines = vec![
            Self::row("Target", target),
            Self::row("Comparisons", stats.comparisons.to_string()),
            Self::row("Range", stats.range_label()),
            Self::row("Complexity", "O(log n)".to_string()),
            Self::row("Array size", stats.array_len.to_string()),
            Self::row("Speed", format!("{:.1}x ({playback})", self.speed)),
            Line::default(),
        ];

        lines.extend(Highlight::ALL.iter().map(|&highlight| {
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(highlight_color(highlight))),
                Span::raw(highlight.label()),
            ])
        }));
        lines
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(Span::styled(
                " Statistics ",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
