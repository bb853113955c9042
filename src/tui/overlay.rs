use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::directory::PersonRecord;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 14;

/// Hit regions of the overlay controls, recorded at draw time so the mouse
/// handler can resolve clicks anywhere inside a control.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayControls {
    pub prev: Rect,
    pub close: Rect,
    pub next: Rect,
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Draw the detail overlay for the focused record. On next/prev only the
/// detail lines change; the dialog frame and control regions keep their
/// identity, so nothing needs re-binding.
pub fn render(frame: &mut Frame, area: Rect, record: &PersonRecord) -> OverlayControls {
    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Employee Detail ");
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

    frame.render_widget(
        Paragraph::new(detail_lines(record)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let buttons = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(chunks[1]);

    let button_style = Style::default().fg(Color::Black).bg(Color::Cyan);
    frame.render_widget(
        Paragraph::new(" ◀ Prev ")
            .style(button_style)
            .alignment(Alignment::Center),
        buttons[0],
    );
    frame.render_widget(
        Paragraph::new(" Close ")
            .style(button_style)
            .alignment(Alignment::Center),
        buttons[1],
    );
    frame.render_widget(
        Paragraph::new(" Next ▶ ")
            .style(button_style)
            .alignment(Alignment::Center),
        buttons[2],
    );

    OverlayControls {
        prev: buttons[0],
        close: buttons[1],
        next: buttons[2],
    }
}

fn detail_lines(record: &PersonRecord) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::Gray);
    vec![
        Line::from(vec![
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
        ]),
        Line::from(Span::styled(record.email.clone(), dim)),
        Line::from(Span::styled(record.city.clone(), dim)),
        Line::from(Span::styled(
            "─".repeat(DIALOG_WIDTH as usize - 2),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::raw(record.phone.clone())),
        Line::from(Span::raw(record.address_line())),
        Line::from(Span::raw(format!("Birthday: {}", record.birthday()))),
        Line::from(Span::styled(
            record.picture_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
