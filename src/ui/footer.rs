use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

pub const QUIT_HINT: &str = " q / Esc / Ctrl+C: Quit";

/// Bottom bar: quit keys on the left, crate version in the right border.
pub fn footer_widget(area: Rect) -> Paragraph<'static> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let version = Line::styled(format!(" v{} ", env!("CARGO_PKG_VERSION")), dim).right_aligned();
    // Hints are dropped first when the bar is too narrow for both.
    let hints = if (area.width as usize) < QUIT_HINT.len() + version.width() + 2 {
        Line::default()
    } else {
        Line::styled(QUIT_HINT, dim)
    };

    Paragraph::new(hints).style(dim).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title_bottom(version),
    )
}
