use crate::calc::month_grid::{add_months, build_month_grid, month_header, DayCell};
use crate::calc::resolver::get_reading;
use crate::data::catalog::PlanCatalog;
use crate::data::plan::{date_key, plan_info, reading_stats, suggested_time};
use crate::data::progress::ProgressStore;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration as StdDuration;

const COMPLETED_COLOR: Color = Color::Green;
const NOTE_COLOR: Color = Color::Cyan;

#[derive(PartialEq)]
enum Mode {
    Normal,
    EditNote,
}

pub struct App<'a> {
    catalog: &'a PlanCatalog,
    store: &'a mut ProgressStore,
    selected_date: NaiveDate,
    /// First day of the month the grid currently shows. n/p move this
    /// without touching the selection; arrow keys pull it along.
    cursor_month: NaiveDate,
    today: NaiveDate,
    mode: Mode,
    input_buffer: String,
    /// Absolute path to the data directory, shown in the footer.
    data_dir: PathBuf,
}

impl<'a> App<'a> {
    pub fn new(
        catalog: &'a PlanCatalog,
        store: &'a mut ProgressStore,
        today: NaiveDate,
        data_dir: PathBuf,
    ) -> Self {
        let cursor_month = first_of_month(today);
        App {
            catalog,
            store,
            selected_date: today,
            cursor_month,
            today,
            mode: Mode::Normal,
            input_buffer: String::new(),
            data_dir,
        }
    }

    fn move_selected(&mut self, days: i64) {
        if let Some(d) = self
            .selected_date
            .checked_add_signed(Duration::days(days))
        {
            self.selected_date = d;
            self.cursor_month = first_of_month(d);
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::EditNote => {
                match code {
                    KeyCode::Enter => {
                        self.store
                            .save_notes(self.selected_date, &self.input_buffer);
                        self.input_buffer.clear();
                        self.mode = Mode::Normal;
                    }
                    KeyCode::Esc => {
                        self.input_buffer.clear();
                        self.mode = Mode::Normal;
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Char(c) => {
                        self.input_buffer.push(c);
                    }
                    _ => {}
                }
                false
            }

            Mode::Normal => {
                match code {
                    KeyCode::Left => self.move_selected(-1),
                    KeyCode::Right => self.move_selected(1),
                    KeyCode::Up => self.move_selected(-7),
                    KeyCode::Down => self.move_selected(7),
                    KeyCode::Char(' ') => {
                        if self.store.is_complete(self.selected_date) {
                            self.store.unmark_complete(self.selected_date);
                        } else {
                            self.store
                                .mark_complete_on(self.selected_date, self.today);
                        }
                    }
                    KeyCode::Char('e') => {
                        self.input_buffer = self.store.notes_for(self.selected_date).to_string();
                        self.mode = Mode::EditNote;
                    }
                    KeyCode::Char('r') => {
                        let next = self.store.current_plan().next();
                        self.store.switch_plan(next, self.today);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return true
                    }
                    KeyCode::Char('c') => {
                        let toggled = self.store.calendar_type().toggled();
                        self.store.set_calendar_type(toggled);
                    }
                    KeyCode::Char('n') => {
                        self.cursor_month = add_months(self.cursor_month, 1);
                    }
                    KeyCode::Char('p') => {
                        self.cursor_month = add_months(self.cursor_month, -1);
                    }
                    KeyCode::Char('t') => {
                        self.selected_date = self.today;
                        self.cursor_month = first_of_month(self.today);
                    }
                    KeyCode::Char('q') => return true,
                    _ => {}
                }
                false
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // month grid (title + header + 6 weeks)
                Constraint::Length(12), // reading + stats panels
                Constraint::Min(9),     // notes + help + footer
            ])
            .split(size);

        self.render_calendar(f, chunks[0]);
        self.render_reading_and_stats(f, chunks[1]);
        self.render_notes_and_help(f, chunks[2]);
    }

    fn render_calendar(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let year = self.cursor_month.year();
        let month = self.cursor_month.month();
        let title = month_header(self.store.calendar_type(), year, month);

        let cells = build_month_grid(
            year,
            month,
            self.today,
            self.selected_date,
            self.store.completion(),
        );

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!("{:^21}", title),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Line::from("Su Mo Tu We Th Fr Sa"),
        ];

        for week in cells.chunks(7) {
            let mut spans = Vec::new();
            for cell in week {
                let has_note = cell
                    .date
                    .map(|d| self.store.has_notes(d))
                    .unwrap_or(false);
                spans.push(Span::styled(
                    format!("{:2}", cell.day),
                    day_cell_style(cell, has_note),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        let widget = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
        f.render_widget(widget, area);
    }

    fn render_reading_and_stats(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(42)])
            .split(area);

        let plan = self.store.current_plan();
        let reading = get_reading(self.catalog, self.store, self.selected_date, plan);

        // ── Reading panel ─────────────────────────────────────────────────────
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                reading.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(reading.passages.join(", ")),
            Line::from(reading.theme.clone()),
            Line::from(format!(
                "{} chapter{}",
                reading.chapters,
                if reading.chapters == 1 { "" } else { "s" }
            )),
        ];
        if let Some(month) = &reading.month {
            lines.push(Line::from(format!("Month: {month}")));
        }
        if let Some(focus) = &reading.focus {
            lines.push(Line::from(format!("Focus: {focus}")));
        }
        if let Some(feast) = &reading.feast {
            lines.push(Line::from(format!("Feast: {feast}")));
        }
        lines.push(Line::from(""));
        let completed = self.store.is_complete(self.selected_date);
        lines.push(Line::from(Span::styled(
            if completed {
                "[x] completed — Space to unmark"
            } else {
                "[ ] not completed — Space to mark"
            },
            if completed {
                Style::default().fg(COMPLETED_COLOR)
            } else {
                Style::default()
            },
        )));

        let reading_widget = Paragraph::new(lines).block(
            Block::default().borders(Borders::ALL).title(format!(
                " Reading for {} — {} ",
                date_key(self.selected_date),
                plan_info(plan).name
            )),
        );
        f.render_widget(reading_widget, panels[0]);

        // ── Stats panel ───────────────────────────────────────────────────────
        let stats = self.store.statistics();
        let progress = reading_stats(plan, stats.total_completed);

        let rows = vec![
            stat_row("Total Completed", format!("{}", stats.total_completed)),
            stat_row(
                "Current Streak",
                format!("{} day(s)", stats.current_streak),
            ),
            stat_row(
                "Longest Streak",
                format!("{} day(s)", stats.longest_streak),
            ),
            stat_row(
                "Plan Progress",
                format!(
                    "{} / {}  ({}%)",
                    progress.completed, progress.total_days, progress.percent
                ),
            ),
            stat_row("Remaining", format!("{}", progress.remaining)),
            stat_row("Suggested Time", suggested_time(plan)),
        ];

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(18)])
            .block(Block::default().borders(Borders::ALL).title(" Statistics "));
        f.render_widget(table, panels[1]);
    }

    fn render_notes_and_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(format!(
            "Notes for {}:",
            date_key(self.selected_date)
        )));
        match self.mode {
            Mode::EditNote => {
                lines.push(Line::from(format!("  Editing: {}_", self.input_buffer)));
                lines.push(Line::from(Span::styled(
                    "  Enter=save  Esc=cancel",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Mode::Normal => {
                let note = self.store.notes_for(self.selected_date);
                if note.is_empty() {
                    lines.push(Line::from("  (no notes)"));
                } else {
                    lines.push(Line::from(format!("  {note}")));
                }
            }
        }

        let key_rows: Vec<Row> = vec![
            Row::new(vec!["← → ↑ ↓", "Move date", "n / p", "Next/prev month"]),
            Row::new(vec!["Space", "Toggle completed", "e", "Edit notes"]),
            Row::new(vec!["r", "Switch reading plan", "c", "Calendar labels"]),
            Row::new(vec!["t", "Jump to today", "q/Ctrl+C", "Quit"]),
        ];

        let help_table = Table::new(
            key_rows,
            [
                Constraint::Length(12),
                Constraint::Length(24),
                Constraint::Length(12),
                Constraint::Length(24),
            ],
        )
        .block(Block::default().borders(Borders::NONE))
        .column_spacing(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // notes content
                Constraint::Length(4), // help table
                Constraint::Length(1), // data dir footer
            ])
            .split(area);

        let notes_widget = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
        f.render_widget(notes_widget, chunks[0]);
        f.render_widget(help_table, chunks[1]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Data  ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                self.data_dir.to_string_lossy().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        f.render_widget(footer, chunks[2]);
    }
}

/// Determines the style for one grid cell based on its state.
pub(crate) fn day_cell_style(cell: &DayCell, has_note: bool) -> Style {
    if cell.other_month {
        Style::default().add_modifier(Modifier::DIM)
    } else if cell.is_selected {
        let bg = if cell.is_completed {
            COMPLETED_COLOR
        } else {
            Color::White
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else if cell.is_completed {
        let mut s = Style::default()
            .fg(COMPLETED_COLOR)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        if cell.is_today {
            s = s.add_modifier(Modifier::REVERSED);
        }
        s
    } else if cell.is_today {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else if has_note {
        Style::default().fg(NOTE_COLOR)
    } else {
        Style::default()
    }
}

fn stat_row(label: &str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("  {label}")),
        Cell::from(value),
    ])
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
