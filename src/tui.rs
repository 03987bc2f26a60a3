use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;

use crate::core::application::Application;
use crate::core::display::{StatusStyle, Tone};
use crate::core::error::GigError;
use crate::core::filter::{matches, StatusFilter};
use crate::core::formatter::{format_applied_line, format_earnings, format_tab_label};
use crate::core::group::{Bucket, Grouped};
use crate::core::session::{Session, SessionEvent};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, GigError> {
        enable_raw_mode().map_err(|e| GigError::Terminal {
            message: e.to_string(),
        })?;
        let mut stdout = io::stdout();
        stdout
            .execute(EnterAlternateScreen)
            .map_err(|e| GigError::Terminal {
                message: e.to_string(),
            })?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

#[derive(Debug)]
struct AppState {
    session: Session,
    records: Vec<Application>,
    search: String,
    filter: StatusFilter,
    tab: Bucket,
    scroll_offset: usize,
    view_lines: usize,
    should_quit: bool,
}

impl AppState {
    fn new(records: Vec<Application>, search: String, filter: StatusFilter) -> Self {
        Self {
            session: Session::Loading,
            records,
            search,
            filter,
            tab: Bucket::Active,
            scroll_offset: 0,
            view_lines: 1,
            should_quit: false,
        }
    }

    fn filtered(&self) -> Vec<&Application> {
        self.records
            .iter()
            .filter(|app| matches(app, &self.search, self.filter))
            .collect()
    }

    fn next_tab(&mut self) {
        self.tab = match self.tab {
            Bucket::Active => Bucket::Completed,
            Bucket::Completed => Bucket::Rejected,
            Bucket::Rejected => Bucket::Active,
        };
        self.scroll_offset = 0;
    }

    fn prev_tab(&mut self) {
        self.tab = match self.tab {
            Bucket::Active => Bucket::Rejected,
            Bucket::Completed => Bucket::Active,
            Bucket::Rejected => Bucket::Completed,
        };
        self.scroll_offset = 0;
    }

    fn set_view_lines(&mut self, lines: usize) {
        self.view_lines = lines.max(1);
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize, total_lines: usize) {
        let max_scroll = total_lines.saturating_sub(self.view_lines);
        self.scroll_offset = (self.scroll_offset + lines).min(max_scroll);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Loading and sign-in screens only accept quit keys.
        if !matches!(self.session, Session::Authenticated(_)) {
            return;
        }

        match key.code {
            KeyCode::Char(ch) => {
                self.search.push(ch);
                self.scroll_offset = 0;
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.scroll_offset = 0;
            }
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Right => {
                self.filter = self.filter.cycle_next();
                self.scroll_offset = 0;
            }
            KeyCode::Left => {
                self.filter = self.filter.cycle_prev();
                self.scroll_offset = 0;
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => {
                let total = self.card_line_count();
                self.scroll_down(1, total);
            }
            KeyCode::PageUp => {
                let step = self.view_lines.saturating_sub(1).max(1);
                self.scroll_up(step);
            }
            KeyCode::PageDown => {
                let step = self.view_lines.saturating_sub(1).max(1);
                let total = self.card_line_count();
                self.scroll_down(step, total);
            }
            _ => {}
        }
    }

    fn card_line_count(&self) -> usize {
        let filtered = self.filtered();
        let grouped = Grouped::partition(filtered);
        card_lines(&grouped, self.tab).len()
    }
}

pub fn run(
    records: Vec<Application>,
    search: String,
    filter: StatusFilter,
    session_rx: mpsc::Receiver<SessionEvent>,
) -> Result<(), GigError> {
    let _guard = TerminalGuard::enter()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| GigError::Terminal {
        message: e.to_string(),
    })?;

    let mut app = AppState::new(records, search, filter);

    loop {
        while let Ok(event) = session_rx.try_recv() {
            let SessionEvent::Resolved(profile) = event;
            app.session = Session::resolve(profile);
        }

        let size = terminal.size().map_err(|e| GigError::Terminal {
            message: e.to_string(),
        })?;
        let body_height = size.height.saturating_sub(12).max(3) as usize;
        app.set_view_lines(body_height.saturating_sub(2).max(1));

        terminal
            .draw(|frame| {
                let area = frame.size();
                match &app.session {
                    Session::Loading => {
                        let placeholder = Paragraph::new("Loading applications...")
                            .block(Block::default().title("gigboard").borders(Borders::ALL));
                        frame.render_widget(placeholder, area);
                    }
                    Session::Unauthenticated => {
                        let prompt = Paragraph::new(vec![
                            Line::from(Span::styled(
                                "Please Sign In",
                                Style::default().add_modifier(Modifier::BOLD),
                            )),
                            Line::from("You need to be signed in to view your applications."),
                            Line::from(Span::styled(
                                "[Sign In]",
                                Style::default().fg(Color::Blue),
                            )),
                            Line::from(""),
                            Line::from("Esc to quit"),
                        ])
                        .block(Block::default().title("gigboard").borders(Borders::ALL))
                        .wrap(Wrap { trim: true });
                        frame.render_widget(prompt, area);
                    }
                    Session::Authenticated(profile) => {
                        let layout = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([
                                Constraint::Length(3),
                                Constraint::Length(3),
                                Constraint::Length(3),
                                Constraint::Min(3),
                                Constraint::Length(3),
                            ])
                            .split(area);

                        let filtered = app.filtered();
                        let grouped = Grouped::partition(filtered);

                        let header = Paragraph::new(format!(
                            "My Applications - {}",
                            profile.display_name
                        ))
                        .block(Block::default().title("gigboard").borders(Borders::ALL));
                        frame.render_widget(header, layout[0]);

                        let filter_line = Line::from(vec![
                            Span::raw("Search: "),
                            Span::raw(app.search.clone()),
                            Span::raw("  |  Filter: "),
                            Span::styled(
                                app.filter.label(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                        ]);
                        let filter_bar = Paragraph::new(filter_line)
                            .block(Block::default().title("Filter").borders(Borders::ALL));
                        frame.render_widget(filter_bar, layout[1]);
                        frame.set_cursor(
                            layout[1].x + 9 + app.search.len() as u16,
                            layout[1].y + 1,
                        );

                        let tabs = render_tabs(&grouped, app.tab);
                        frame.render_widget(tabs, layout[2]);

                        let body = render_body(&grouped, app.tab, app.scroll_offset, layout[3].height as usize);
                        frame.render_widget(body, layout[3]);

                        let hints = Paragraph::new(
                            "type to search | Tab: switch tab | Left/Right: status filter | Up/Down: scroll | Esc: quit",
                        )
                        .block(Block::default().borders(Borders::ALL));
                        frame.render_widget(hints, layout[4]);
                    }
                }
            })
            .map_err(|e| GigError::Terminal {
                message: e.to_string(),
            })?;

        if event::poll(Duration::from_millis(50)).map_err(|e| GigError::Terminal {
            message: e.to_string(),
        })? {
            if let Event::Key(key) = event::read().map_err(|e| GigError::Terminal {
                message: e.to_string(),
            })? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Warning => Color::Yellow,
        Tone::Success => Color::Green,
        Tone::Info => Color::Blue,
        Tone::Highlight => Color::Magenta,
        Tone::Danger => Color::Red,
        Tone::Neutral => Color::Gray,
    }
}

fn render_tabs(grouped: &Grouped<'_>, active: Bucket) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for bucket in Bucket::ordered() {
        let label = format_tab_label(bucket, grouped.count(bucket));
        let style = if bucket == active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }
    Paragraph::new(Line::from(spans))
        .block(Block::default().title("Applications").borders(Borders::ALL))
}

fn card_lines(grouped: &Grouped<'_>, tab: Bucket) -> Vec<Line<'static>> {
    let entries = grouped.bucket(tab);
    if entries.is_empty() {
        let mut lines = vec![Line::from(tab.empty_message())];
        if tab == Bucket::Active {
            lines.push(Line::from(Span::styled(
                "[Browse Jobs]",
                Style::default().fg(Color::Blue),
            )));
        }
        return lines;
    }

    let mut lines = Vec::new();
    for app in entries {
        let style = StatusStyle::of_raw(app.status.as_str());
        lines.push(Line::from(vec![
            Span::styled(
                app.job_title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(style.label, Style::default().fg(tone_color(style.tone))),
        ]));
        lines.push(Line::from(app.company.clone()));
        lines.push(Line::from(app.description.clone()));
        let mut meta = vec![
            Span::raw(format_applied_line(app.applied_date)),
            Span::raw("  |  "),
            Span::raw(app.category.clone()),
        ];
        if let Some(earned) = format_earnings(app.earnings) {
            meta.push(Span::raw("  |  "));
            meta.push(Span::styled(earned, Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(meta));
        lines.push(Line::from(""));
    }
    lines
}

fn render_body(
    grouped: &Grouped<'_>,
    tab: Bucket,
    scroll_offset: usize,
    height: usize,
) -> Paragraph<'static> {
    let lines = card_lines(grouped, tab);
    let view = height.saturating_sub(2).max(1);
    let start = scroll_offset.min(lines.len().saturating_sub(1));
    let end = (start + view).min(lines.len());
    let visible: Vec<Line> = lines[start..end].to_vec();

    Paragraph::new(visible)
        .block(
            Block::default()
                .title(tab.label())
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false })
}
