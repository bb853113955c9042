pub mod grid;
pub mod overlay;

use std::io;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::directory::{Direction, Directory, PersonRecord};
use crate::fetcher::FetchError;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Whether keystrokes go to grid navigation or the filter input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputMode {
    Browse,
    Filter,
}

/// All interface state. The directory is owned here for the whole session;
/// renderers borrow records from it by index.
pub struct App {
    directory: Directory,
    fetch_pending: bool,
    selected: usize,
    visible: Vec<usize>,
    filter_input: String,
    filter_query: String,
    mode: InputMode,
    overlay_open: bool,
    first_row: usize,
    columns: usize,
    card_regions: Vec<(Rect, usize)>,
    overlay_controls: overlay::OverlayControls,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            fetch_pending: true,
            selected: 0,
            visible: Vec::new(),
            filter_input: String::new(),
            filter_query: String::new(),
            mode: InputMode::Browse,
            overlay_open: false,
            first_row: 0,
            columns: 1,
            card_regions: Vec::new(),
            overlay_controls: overlay::OverlayControls::default(),
            should_quit: false,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Boundary for the one asynchronous operation in the program. Failures
    /// are logged and swallowed; the directory simply stays empty.
    pub fn on_fetch_result(&mut self, result: Result<Vec<PersonRecord>, FetchError>) {
        self.fetch_pending = false;
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "directory loaded");
                self.directory.load(records);
                self.refresh_visible();
            }
            Err(error) => {
                tracing::warn!(%error, "directory fetch failed");
            }
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = grid::visible_indices(self.directory.records(), &self.filter_query);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// Commit the typed query. Hidden cards stay in the store and reappear
    /// when a later query matches them again.
    pub fn submit_filter(&mut self, query: &str) {
        self.filter_input = query.to_string();
        self.filter_query = query.to_string();
        self.selected = 0;
        self.first_row = 0;
        self.refresh_visible();
    }

    /// Card activation: focus the record and bring up the overlay.
    pub fn open_overlay_at(&mut self, record_index: usize) {
        self.directory.set_cursor(record_index);
        self.overlay_open = true;
    }

    fn activate_selected(&mut self) {
        // A no-op before the fetch resolves: no cards exist yet.
        if let Some(&record_index) = self.visible.get(self.selected) {
            self.open_overlay_at(record_index);
        }
    }

    /// Overlay navigation wraps over the full record list, ignoring any
    /// active filter.
    pub fn navigate(&mut self, direction: Direction) {
        self.directory.advance(direction);
    }

    /// The cursor goes stale but stays put; it is inert until a card is
    /// activated again.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.overlay_open {
            self.handle_overlay_key(key.code);
        } else {
            match self.mode {
                InputMode::Browse => self.handle_browse_key(key.code),
                InputMode::Filter => self.handle_filter_key(key.code),
            }
        }
    }

    fn handle_overlay_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('x') => self.close_overlay(),
            KeyCode::Right | KeyCode::Char('n') => self.navigate(Direction::Next),
            KeyCode::Left | KeyCode::Char('p') => self.navigate(Direction::Prev),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => self.mode = InputMode::Filter,
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected + 1 < self.visible.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected >= self.columns {
                    self.selected -= self.columns;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + self.columns < self.visible.len() {
                    self.selected += self.columns;
                }
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let query = self.filter_input.clone();
                self.submit_filter(&query);
                self.mode = InputMode::Browse;
            }
            KeyCode::Esc => {
                // Abandon the edit; the committed query stays in effect.
                self.filter_input = self.filter_query.clone();
                self.mode = InputMode::Browse;
            }
            KeyCode::Backspace => {
                self.filter_input.pop();
            }
            KeyCode::Char(c) => {
                self.filter_input.push(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.overlay_open {
                    self.handle_overlay_click(position);
                } else if let Some(record_index) =
                    grid::hit_region(&self.card_regions, position)
                {
                    // Keep keyboard selection in step with the clicked card.
                    if let Some(pos) = self.visible.iter().position(|&i| i == record_index) {
                        self.selected = pos;
                    }
                    self.open_overlay_at(record_index);
                }
            }
            MouseEventKind::ScrollUp if !self.overlay_open => {
                if self.selected >= self.columns {
                    self.selected -= self.columns;
                }
            }
            MouseEventKind::ScrollDown if !self.overlay_open => {
                if self.selected + self.columns < self.visible.len() {
                    self.selected += self.columns;
                }
            }
            _ => {}
        }
    }

    fn handle_overlay_click(&mut self, position: Position) {
        let controls = self.overlay_controls;
        if controls.close.contains(position) {
            self.close_overlay();
        } else if controls.next.contains(position) {
            self.navigate(Direction::Next);
        } else if controls.prev.contains(position) {
            self.navigate(Direction::Prev);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_grid(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        if self.overlay_open {
            if let Some(record) = self.directory.focused() {
                self.overlay_controls = overlay::render(frame, frame.area(), record);
            }
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let halves =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Crewdex", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  employee directory"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, halves[0]);

        let searching = self.mode == InputMode::Filter;
        let search_style = if searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let shown = if searching {
            format!("{}_", self.filter_input)
        } else if self.filter_input.is_empty() {
            "press / to search".to_string()
        } else {
            self.filter_input.clone()
        };
        let search = Paragraph::new(shown).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title(" Search "),
        );
        frame.render_widget(search, halves[1]);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        self.columns = grid::columns_for_width(area.width);
        let rows_on_screen = ((area.height / grid::CARD_HEIGHT) as usize).max(1);
        let selected_row = self.selected / self.columns;
        self.first_row = grid::first_visible_row(selected_row, self.first_row, rows_on_screen);

        self.card_regions = grid::render(
            frame,
            area,
            self.directory.records(),
            &self.visible,
            self.selected,
            self.first_row,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let status = if self.fetch_pending {
            "fetching directory...".to_string()
        } else {
            format!("{} of {} shown", self.visible.len(), self.directory.len())
        };
        let hints = if self.overlay_open {
            "←/→ prev/next  Esc close"
        } else {
            "↑↓←→ move  Enter open  / search  q quit"
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(status, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Left);
        frame.render_widget(footer, area);
    }
}

/// Run the interface until the user quits. The fetch result arrives through
/// `rx` and is drained on the event-loop tick, so the grid stays empty until
/// the one network call resolves.
pub fn run(mut rx: mpsc::Receiver<Result<Vec<PersonRecord>, FetchError>>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    // Always restore the terminal, even on an early error return.
    struct TerminalRestore;
    impl Drop for TerminalRestore {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let mut stdout = io::stdout();
            let _ = execute!(
                stdout,
                LeaveAlternateScreen,
                DisableMouseCapture,
                cursor::Show
            );
        }
    }
    let _restore = TerminalRestore;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;
    let mut app = App::new();

    while !app.should_quit() {
        match rx.try_recv() {
            Ok(result) => app.on_fetch_result(result),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {}
        }

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
