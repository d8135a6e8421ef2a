//! TUI testing utilities using Ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Whether any cell is drawn with `symbol` in foreground `color`
pub fn has_cell_with_fg(buffer: &Buffer, symbol: &str, color: Color) -> bool {
    buffer
        .content()
        .iter()
        .any(|cell| cell.symbol() == symbol && cell.fg == color)
}
