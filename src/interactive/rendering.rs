//! TUI rendering with ratatui
//!
//! Draws the pyramid, the lives pool and the letter keyboard.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Letter};
use crate::engine::{GameState, LetterBox, MAX_SCORE, RevealKind, Row, RowStatus};
use crate::output::formatters::box_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board and info
            Constraint::Length(6), // Keyboard or share text
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    match app.input_mode {
        InputMode::Playing => render_keyboard(f, app.round.state(), chunks[2]),
        InputMode::GameOver | InputMode::AlreadyPlayed => render_result(f, app, chunks[2]),
    }

    render_status(f, app, chunks[3]);
}

fn title_of(app: &App) -> String {
    if let Some(previous) = &app.previous {
        return format!("Piramit #{}", previous.day_number);
    }
    let state = app.round.state();
    if state.mode_label().is_empty() {
        format!("Piramit #{}", state.day_number())
    } else {
        state.mode_label().to_string()
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🔺 PİRAMİT | {}", title_of(app)))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn box_style(letter_box: &LetterBox, row: &Row) -> Style {
    match (letter_box.revealed, letter_box.reveal) {
        (true, RevealKind::Fail) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        (true, _) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (false, _) if row.status() == RowStatus::Active => Style::default().fg(Color::White),
        (false, _) => Style::default().fg(Color::DarkGray),
    }
}

fn board_line(state: &GameState, index: usize) -> Line<'static> {
    let row = &state.rows()[index];
    let mut spans: Vec<Span> = row
        .boxes()
        .iter()
        .map(|b| Span::styled(format!("[{:^3}]", box_label(b)), box_style(b, row)))
        .collect();

    let marker = match row.status() {
        RowStatus::Active => Span::styled(" ◀", Style::default().fg(Color::Yellow)),
        RowStatus::Completed => Span::styled(
            format!(" {}", state.row_scores()[index]),
            Style::default().fg(Color::Green),
        ),
        RowStatus::Failed => Span::styled(" ✗", Style::default().fg(Color::Red)),
        RowStatus::Pending => Span::raw("  "),
    };
    spans.push(marker);
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Pyramid ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content: Vec<Line> = if let Some(previous) = &app.previous {
        vec![
            Line::from(""),
            Line::from("You already played today's pyramid."),
            Line::from(format!(
                "Score: {}/{MAX_SCORE} on {}",
                previous.total_score, previous.date
            )),
            Line::from(""),
            Line::from("A new pyramid opens at midnight."),
        ]
    } else {
        let state = app.round.state();
        let mut lines = vec![Line::from("")];
        for i in 0..state.rows().len() {
            lines.push(board_line(state, i));
            lines.push(Line::from(""));
        }
        lines
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Length(6), // Score
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_lives(f, app.round.state(), chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, state: &GameState, area: Rect) {
    let total = state.total_lives().max(1);
    let percent = (state.lives_remaining() * 100 / total).min(100) as u16;
    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Can ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{}/{}",
            state.lives_remaining(),
            state.total_lives()
        ));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let state = app.round.state();
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Skor:  "),
            Span::styled(
                format!("{}/{MAX_SCORE}", state.total_score()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Hints: {}", "💡".repeat(app.round.hints_remaining() as usize))),
    ];

    if let Some(stats) = &app.stats {
        lines.push(Line::from(format!(
            "Played: {} | Avg: {:.1}",
            stats.games_played, stats.average_score
        )));
        lines.push(Line::from(format!(
            "Streak: {} | Best: {}",
            stats.current_streak, stats.max_streak
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Keyboard colored by the letters tried on the active row
fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let row = state.active_row();
    let key = |c: char| {
        let style = match Letter::from_char(c) {
            Some(l) if row.has_guessed(l) && row.word().has_letter(l) => {
                Style::default().fg(Color::Black).bg(Color::Green)
            }
            Some(l) if row.has_guessed(l) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            _ => Style::default().fg(Color::White),
        };
        Span::styled(format!(" {c} "), style)
    };

    let half = ALPHABET.len().div_ceil(2);
    let lines = vec![
        Line::from(ALPHABET[..half].iter().map(|&c| key(c)).collect::<Vec<_>>()),
        Line::from(ALPHABET[half..].iter().map(|&c| key(c)).collect::<Vec<_>>()),
    ];

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Harfler | type a letter, '?' for a hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(keyboard, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let state = app.round.state();
    let (title, color) = match state.final_score() {
        Some(score) if score.is_perfect() => (" 🏆 Kusursuz! ", Color::Green),
        Some(_) if state.rows().iter().all(|r| r.status() == RowStatus::Completed) => {
            (" 🎉 Tebrikler! ", Color::Green)
        }
        Some(_) => (" 💔 Out of lives ", Color::Red),
        None => (" Piramit ", Color::Cyan),
    };

    let text = app.share_text.clone().unwrap_or_default();
    let result = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(result, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.endless {
        Some(pool) => format!("Mode: Endless ({})", pool.label()),
        None => "Mode: Daily".to_string(),
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let state = app.round.state();
    let row_text = format!(
        "Row: {}/{}",
        (state.current_row() + 1).min(state.rows().len()),
        state.rows().len()
    );
    f.render_widget(
        Paragraph::new(row_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | ?: Hint | !: Share",
        InputMode::GameOver if app.endless.is_some() => "q: Quit | n: New Game | s: Share",
        InputMode::GameOver | InputMode::AlreadyPlayed => "q: Quit | s: Share",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
