use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;
use std::time::{Duration, Instant};

use crate::models::{AppliedJob, ApplicationStatus, Job, SwipeDirection};
use crate::swipe::SwipeEngine;
use crate::toast::ToastKind;

const TICK_RATE: Duration = Duration::from_millis(50);

struct AppState {
    engine: SwipeEngine,
    selected: usize,
    expanded: Option<String>,
    scroll_offset: u16,
}

impl AppState {
    fn new(engine: SwipeEngine) -> Self {
        Self {
            engine,
            selected: 0,
            expanded: None,
            scroll_offset: 0,
        }
    }

    fn selected_application(&self) -> Option<&AppliedJob> {
        self.engine.applications().get(self.selected)
    }

    fn next_application(&mut self) {
        let len = self.engine.applications().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    fn prev_application(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn toggle_expanded(&mut self) {
        let Some(record) = self.selected_application() else {
            return;
        };
        if self.expanded.as_deref() == Some(record.id.as_str()) {
            self.expanded = None;
        } else {
            self.expanded = Some(record.id.clone());
        }
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}

pub fn run_swipe(engine: SwipeEngine) -> Result<()> {
    let mut state = AppState::new(engine);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut state);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut list_state = ListState::default();
    list_state.select(Some(0));

    loop {
        state.engine.tick(Instant::now());

        // Front-appends shift the applied list under the cursor; keep the
        // selection in range.
        let len = state.engine.applications().len();
        if len > 0 && state.selected >= len {
            state.selected = len - 1;
        }
        list_state.select(if len == 0 { None } else { Some(state.selected) });

        terminal.draw(|frame| draw(frame, state, &mut list_state))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let now = Instant::now();
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left | KeyCode::Char('h') => {
                    state.engine.handle_swipe(SwipeDirection::Left, now);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    state.engine.handle_swipe(SwipeDirection::Right, now);
                }
                KeyCode::Char('u') => state.engine.rewind(now),
                KeyCode::Char('j') | KeyCode::Down => state.next_application(),
                KeyCode::Char('k') | KeyCode::Up => state.prev_application(),
                KeyCode::Char('e') | KeyCode::Enter => state.toggle_expanded(),
                KeyCode::Char('t') => {
                    if let Some(id) = state.selected_application().map(|r| r.id.clone()) {
                        state.engine.complete_task(&id);
                    }
                }
                KeyCode::Char('d') => state.engine.dismiss_toast(),
                KeyCode::PageDown | KeyCode::Char('J') => state.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('K') => state.scroll_up(),
                _ => {}
            }
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, state: &AppState, list_state: &mut ListState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // toast banner
            Constraint::Min(0),    // main panes
            Constraint::Length(1), // key help
        ])
        .split(frame.area());

    draw_toast(frame, state, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    draw_deck(frame, state, panes[0]);
    draw_tracker(frame, state, panes[1], list_state);

    let help = Paragraph::new(
        " \u{2190}/h:pass  \u{2192}/l:apply  u:rewind  j/k:applications  e:expand  t:task done  q:quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[2]);
}

fn draw_toast(frame: &mut Frame, state: &AppState, area: Rect) {
    let Some(toast) = state.engine.toast() else {
        return;
    };
    let style = match toast.kind {
        ToastKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        ToastKind::Error => Style::default().fg(Color::White).bg(Color::Red),
    };
    let banner = Paragraph::new(format!(" {} ", toast.message)).style(style);
    frame.render_widget(banner, area);
}

fn draw_deck(frame: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    let title = format!(
        " Discover Jobs ({} remaining) | rewinds: {} ",
        state.engine.deck().remaining(),
        state.engine.rewind_credits()
    );
    let card = Paragraph::new(build_card(state))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset, 0));
    frame.render_widget(card, chunks[0]);

    // Coming-up preview of the next few cards.
    let mut preview: Vec<Line> = Vec::new();
    for job in state.engine.deck().upcoming() {
        preview.push(Line::from(format!(
            "  {} | {}{}",
            job.title,
            job.company.name,
            format_salary_suffix(job)
        )));
    }
    if preview.is_empty() {
        preview.push(Line::from(Span::styled(
            "  (nothing queued)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let upcoming = Paragraph::new(Text::from(preview))
        .block(Block::default().borders(Borders::ALL).title(" Coming Up "));
    frame.render_widget(upcoming, chunks[1]);
}

fn build_card(state: &AppState) -> Text<'_> {
    let Some(job) = state.engine.current_job() else {
        return Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No more jobs",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Check back later for new opportunities!"),
        ]);
    };

    let mut lines: Vec<Line> = Vec::new();

    if let Some(direction) = state.engine.animating() {
        let (label, color) = match direction {
            SwipeDirection::Left => ("  << PASS >>", Color::Red),
            SwipeDirection::Right => ("  << APPLY >>", Color::Green),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        job.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("at {}", job.company.name)));

    let mut where_line = job.location.clone().unwrap_or_default();
    if job.remote {
        if where_line.is_empty() {
            where_line = "Remote".to_string();
        } else {
            where_line.push_str(" (Remote)");
        }
    }
    if !where_line.is_empty() {
        lines.push(Line::from(where_line));
    }
    lines.push(Line::from(job.employment_type.clone()));

    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => {
            lines.push(Line::from(format!("Pay: {} {} - {}", job.currency, min, max)));
        }
        (Some(min), None) => lines.push(Line::from(format!("Pay: {} {}+", job.currency, min))),
        (None, Some(max)) => {
            lines.push(Line::from(format!("Pay: up to {} {}", job.currency, max)));
        }
        (None, None) => {}
    }

    if let Some(score) = job.match_score {
        lines.push(Line::from(Span::styled(
            format!("Match: {}%", score),
            match_style(score),
        )));
    }
    if let Some(deadline) = &job.deadline {
        lines.push(Line::from(format!("Apply by: {}", deadline)));
    }

    if !job.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Skills: {}", job.skills.join(", "))));
    }

    lines.push(Line::from(""));
    for line in textwrap::fill(&job.description, 70).lines() {
        lines.push(Line::from(line.to_string()));
    }

    if !job.requirements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Requirements",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for req in &job.requirements {
            lines.push(Line::from(format!("  - {}", req)));
        }
    }

    Text::from(lines)
}

fn draw_tracker(frame: &mut Frame, state: &AppState, area: Rect, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(area);

    let items: Vec<ListItem> = state
        .engine
        .applications()
        .iter()
        .map(|record| {
            let mut lines = vec![Line::from(format!(
                "{} {} | {}  {}%",
                status_icon(record.status),
                record.title,
                record.company,
                record.match_strength
            ))];
            if state.expanded.as_deref() == Some(record.id.as_str()) {
                lines.push(Line::from(Span::styled(
                    format!("    status: {}", record.status.as_str()),
                    status_style(record.status),
                )));
                lines.push(Line::from(format!(
                    "    skill gap: {}/{} tasks",
                    record.skill_gap.completed, record.skill_gap.total
                )));
                lines.push(Line::from(format!(
                    "    expected response: {}",
                    record.estimated_response
                )));
                if let Some(date) = record.applied_at.get(..10) {
                    lines.push(Line::from(format!("    applied: {}", date)));
                }
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Applied Jobs ({}) ",
            state.engine.applications().len()
        )))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], list_state);

    let stats = state.engine.stats();
    let summary = Paragraph::new(vec![
        Line::from(format!(
            "Pending: {}   Interviews: {}",
            stats.pending, stats.interviews
        )),
        Line::from(format!("Avg match: {}%", stats.avg_match)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Stats "));
    frame.render_widget(summary, chunks[1]);
}

fn status_icon(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "+",
        ApplicationStatus::Viewed => "o",
        ApplicationStatus::Interview => "*",
        ApplicationStatus::Rejected => "x",
        ApplicationStatus::Offer => "$",
    }
}

fn status_style(status: ApplicationStatus) -> Style {
    match status {
        ApplicationStatus::Applied => Style::default().fg(Color::Cyan),
        ApplicationStatus::Viewed => Style::default().fg(Color::Yellow),
        ApplicationStatus::Interview => Style::default().fg(Color::Green),
        ApplicationStatus::Rejected => Style::default().fg(Color::Red),
        ApplicationStatus::Offer => Style::default().fg(Color::Magenta),
    }
}

fn match_style(score: u8) -> Style {
    if score >= 80 {
        Style::default().fg(Color::Green)
    } else if score >= 60 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn format_salary_suffix(job: &Job) -> String {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => format!("  ({} {}-{})", job.currency, min / 1000, max / 1000),
        _ => String::new(),
    }
}
