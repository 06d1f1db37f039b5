//! TUI rendering with ratatui
//!
//! Board, score panel and message log for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{Tile, TileState};
use crate::session::TileGeometry;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::time::Instant;

const RARE_SCORE: u32 = 8;

struct Panels {
    header: Rect,
    board: Rect,
    side: Rect,
    status: Rect,
}

fn panels(area: Rect, rows: usize, cols: usize) -> Panels {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let board_width = (cols * 4 + 1 + 2) as u16;
    let board_height = (rows * 2 + 1 + 2) as u16;
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(24)])
        .split(chunks[1]);

    let board = Rect {
        height: board_height.min(main_chunks[0].height),
        ..main_chunks[0]
    };

    Panels {
        header: chunks[0],
        board,
        side: main_chunks[1],
        status: chunks[2],
    }
}

fn board_block(flashing: bool) -> Block<'static> {
    let color = if flashing { Color::Green } else { Color::Cyan };
    Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color))
}

/// Screen area that tiles are drawn into, for mouse hit-testing
#[must_use]
pub fn board_inner(area: Rect, rows: usize, cols: usize) -> Rect {
    board_block(false).inner(panels(area, rows, cols).board)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let grid = app.session.grid();
    let panels = panels(f.area(), grid.rows(), grid.cols());

    render_header(f, panels.header);
    render_board(f, app, panels.board, now);
    render_side_panel(f, app, panels.side);
    render_status(f, app, panels.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎈 WORD POPPER")
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

fn tile_style(tile: &Tile) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile.state() {
        TileState::Selected => base.fg(Color::Black).bg(Color::Yellow),
        _ if tile.letter().is_wild() => base.fg(Color::White).bg(Color::Magenta),
        _ if tile.score() >= RARE_SCORE => base.fg(Color::White).bg(Color::Red),
        _ => base.fg(Color::Black).bg(Color::Gray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let block = board_block(app.is_flashing(now));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let geometry: &TileGeometry = app.session.geometry();
    for tile in app.session.grid().live_tiles() {
        let x = inner.x + geometry.left(tile.col()) as u16;
        let y = inner.y + geometry.top(tile.row()) as u16;
        let width = geometry.tile_w as u16;
        if x + width > inner.right() || y >= inner.bottom() {
            continue;
        }
        let label = Span::styled(format!(" {} ", tile.letter()), tile_style(tile));
        f.render_widget(Paragraph::new(label), Rect::new(x, y, width, 1));
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Score
            Constraint::Length(3),  // Progress
            Constraint::Min(4),     // Found words
            Constraint::Length(10), // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_found(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let hints = format!(
        "{}{}",
        "★".repeat(session.hints() as usize),
        "☆".repeat(app.config.hints.saturating_sub(session.hints()) as usize)
    );
    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Hints: "),
            Span::styled(hints, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::raw("Word:  "),
            Span::styled(
                session.word_preview(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let total = grid.rows() * grid.cols();
    let popped = total.saturating_sub(grid.live_count());
    let percent = if total == 0 { 100 } else { popped * 100 / total };

    let gauge = Gauge::default()
        .block(Block::default().title(" Cleared ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent as u16)
        .label(format!("{popped}/{total} tiles"));
    f.render_widget(gauge, area);
}

fn render_found(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.found();
    let items: Vec<ListItem> = found
        .iter()
        .rev()
        .enumerate()
        .map(|(i, word)| {
            ListItem::new(format!(
                "{:>2}. {:<12} {:>4}",
                found.len() - i,
                word.word.to_uppercase(),
                word.score
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let tiles = format!("Tiles left: {}", app.session.grid().live_count());
    f.render_widget(Paragraph::new(tiles).alignment(Alignment::Center), chunks[0]);

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "drag: Spell | hold/right-click: Wild | u: Undo | h: Hint | n: New | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
