use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Widget};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::profile::ProfileContainer;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let profile = app.profile();
    frame.render_widget(
        Header::new().widget(&profile.source_description(), profile.state()),
        header,
    );
    frame.render_widget(Clear, body);
    frame.render_widget(profile, body);
    frame.render_widget(footer_widget(footer), footer);
}

/// Render the container off-screen and return it as plain text, one line
/// per row with trailing blanks trimmed.
pub fn render_to_text(container: &ProfileContainer, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    container.render(area, &mut buf);
    buffer_to_text(&buf)
}

pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buf[(x, y)].symbol());
        }
        rows.push(row.trim_end().to_string());
    }
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    while rows.first().is_some_and(|row| row.is_empty()) {
        rows.remove(0);
    }
    rows.join("\n")
}
