use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::search::ViewModel;

use super::theme::{BORDER_DEFAULT, TEXT_SECONDARY};

/// Log of step messages up to the cursor, scrolled to the latest line.
pub struct StepLog<'a> {
    view: &'a ViewModel,
}

impl<'a> StepLog<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    /// Scroll offset that keeps the last of `lines` visible in `height` rows.
    pub fn scroll_offset(lines: usize, height: u16) -> u16 {
        u16::try_from(lines.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
    }
}

impl Widget for StepLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(" Search Log ");
        let height = block.inner(area).height;
        let line_count = self.view.log_lines().count();

        Paragraph::new(self.view.log.as_str())
            .style(Style::default().fg(TEXT_SECONDARY))
            .block(block)
            .scroll((Self::scroll_offset(line_count, height), 0))
            .render(area, buf);
    }
}
