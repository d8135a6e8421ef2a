//! Bar chart of the array, one bar per element, colored by highlight class.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::search::{Highlight, ViewModel};

use super::theme::{highlight_color, BORDER_DEFAULT, TEXT_BRIGHT, TEXT_MUTED};

pub struct ArrayChart<'a> {
    view: &'a ViewModel,
}

impl<'a> ArrayChart<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    /// Bar width and gap so that `count` bars fit in `width` columns.
    pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
        let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
        let slot = width / count;
        if slot >= 2 {
            (slot - 1, 1)
        } else {
            (1, 0)
        }
    }

    /// Offset subtracted from every value so the shortest bar is still visible.
    fn baseline(values: &[i64]) -> i128 {
        let min = values.iter().copied().min().unwrap_or(0);
        if min > 0 {
            0
        } else {
            i128::from(min) - 1
        }
    }
}

impl Widget for ArrayChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(" Array ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.view.values.is_empty() {
            Paragraph::new("Press g to generate an array")
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEXT_MUTED))
                .render(inner, buf);
            return;
        }

        let (bar_width, bar_gap) = Self::bar_layout(inner.width, self.view.values.len());
        let baseline = Self::baseline(&self.view.values);

        let bars: Vec<Bar> = self
            .view
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let highlight = self
                    .view
                    .highlights
                    .get(i)
                    .copied()
                    .unwrap_or(Highlight::InRange);
                let color = highlight_color(highlight);
                let height = u64::try_from(i128::from(value) - baseline).unwrap_or(u64::MAX);
                Bar::default()
                    .value(height)
                    .text_value(value.to_string())
                    .label(Line::from(i.to_string()))
                    .style(Style::default().fg(color))
                    .value_style(
                        Style::default()
                            .fg(TEXT_BRIGHT)
                            .bg(color)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(bar_gap)
            .render(inner, buf);
    }
}
