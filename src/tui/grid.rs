use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::directory::PersonRecord;
use crate::utils;

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 5;

/// Indices of the records whose cards are currently shown, in list order.
/// Filtering never drops a record from the store; a later query can bring a
/// hidden card back.
pub fn visible_indices(records: &[PersonRecord], query: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| utils::name_matches(&record.full_name(), query))
        .map(|(index, _)| index)
        .collect()
}

pub fn columns_for_width(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// First grid row to draw so the selected row stays on screen.
pub fn first_visible_row(selected_row: usize, current_first: usize, rows_on_screen: usize) -> usize {
    if selected_row < current_first {
        selected_row
    } else if selected_row >= current_first + rows_on_screen {
        selected_row + 1 - rows_on_screen
    } else {
        current_first
    }
}

/// Resolve an arbitrary click position to the enclosing card's record index.
/// The terminal analogue of walking up from an event target to the nearest
/// matching region.
pub fn hit_region(regions: &[(Rect, usize)], position: Position) -> Option<usize> {
    regions
        .iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, index)| *index)
}

/// Draw one summary card per visible record and report the hit region of
/// each drawn card as `(screen rect, record index)`. The index is the
/// record's position in the store, unaffected by filtering.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    records: &[PersonRecord],
    visible: &[usize],
    selected: usize,
    first_row: usize,
) -> Vec<(Rect, usize)> {
    let columns = columns_for_width(area.width);
    let rows_on_screen = ((area.height / CARD_HEIGHT) as usize).max(1);
    let mut regions = Vec::new();

    for (position, &record_index) in visible.iter().enumerate() {
        let row = position / columns;
        let column = position % columns;
        if row < first_row || row >= first_row + rows_on_screen {
            continue;
        }
        let x = area.x + (column as u16) * CARD_WIDTH;
        let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let width = CARD_WIDTH.min(area.right().saturating_sub(x));
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if width < 4 || height < 3 {
            continue;
        }
        let rect = Rect::new(x, y, width, height);

        let record = &records[record_index];
        draw_card(frame, rect, record, position == selected);
        regions.push((rect, record_index));
    }

    regions
}

fn draw_card(frame: &mut Frame, rect: Rect, record: &PersonRecord, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let name_line = Line::from(vec![
        Span::styled(
            format!(" {} ", record.initials()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            record.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let lines = vec![
        name_line,
        Line::from(Span::styled(
            record.email.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            record.city_state(),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
