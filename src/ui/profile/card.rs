//! Stateless presenter for a user record.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget};

use crate::model::UserRecord;
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_SHADOW, HEADER_TEXT, MUTED_TEXT};

const PADDING_X: u16 = 2;
const PADDING_Y: u16 = 1;
/// Shadow offset, right and down.
const SHADOW: u16 = 1;

/// Renders a [`UserRecord`] as a bordered, padded card with a drop shadow.
///
/// Name on the first line as a heading, email below it. Borrows the record
/// and keeps no state, so rendering the same record twice yields the same
/// buffer.
pub struct ProfileCard<'a> {
    record: &'a UserRecord,
}

impl<'a> ProfileCard<'a> {
    pub fn new(record: &'a UserRecord) -> Self {
        Self { record }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.record.name.as_str(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.record.email.as_str(),
                Style::default().fg(MUTED_TEXT),
            )),
        ];

        if let Some(url) = &self.record.avatar_url {
            lines.push(Line::from(vec![
                Span::styled("avatar: ", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)),
                Span::styled(url.as_str(), Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)),
            ]));
        }

        lines
    }

    /// Width and height needed to show the card unclipped, shadow included.
    pub fn size_hint(&self) -> (u16, u16) {
        let lines = self.lines();
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
        let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let width = content_width
            .saturating_add(2 + 2 * PADDING_X)
            .saturating_add(SHADOW);
        let height = content_height
            .saturating_add(2 + 2 * PADDING_Y)
            .saturating_add(SHADOW);
        (width, height)
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER))
            .padding(Padding::new(PADDING_X, PADDING_X, PADDING_Y, PADDING_Y))
            .style(Style::default().fg(HEADER_TEXT))
    }
}

impl Widget for &ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= SHADOW || area.height <= SHADOW {
            return;
        }

        let card = Rect {
            width: area.width - SHADOW,
            height: area.height - SHADOW,
            ..area
        };
        let shadow = Rect {
            x: card.x + SHADOW,
            y: card.y + SHADOW,
            ..card
        };

        Block::default()
            .style(Style::default().bg(CARD_SHADOW))
            .render(shadow, buf);
        Clear.render(card, buf);
        Paragraph::new(self.lines())
            .block(ProfileCard::block())
            .render(card, buf);
    }
}
