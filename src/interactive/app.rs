//! TUI application state and logic

use crate::commands::game_seed;
use crate::config::{ConfigError, GameConfig};
use crate::grid::TileEvent;
use crate::lexicon::Lexicon;
use crate::session::{Point, Session, TileGeometry};
use crate::solver::find_words;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Tiles are three terminal cells wide and one tall, one cell apart
pub const TERMINAL_GEOMETRY: TileGeometry = TileGeometry::new(3.0, 1.0, 1.0);
/// Pointer travel (in terminal cells) that still counts as a long press
pub const TERMINAL_PRESS_SLOP: f64 = 1.5;
/// How long the board border flashes after a pop
const FLASH: Duration = Duration::from_millis(300);
/// Idle redraw interval
const IDLE_POLL: Duration = Duration::from_millis(250);
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub config: GameConfig,
    pub lexicon: &'a Lexicon,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Inner area of the board widget from the last draw
    pub board_area: Rect,
    pub flash_until: Option<Instant>,
    pub games_played: usize,
    log_seen: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: GameConfig, lexicon: &'a Lexicon) -> Result<Self, ConfigError> {
        let config = config.with_press_slop(TERMINAL_PRESS_SLOP);
        let session = Session::new(&config, lexicon)?.with_geometry(TERMINAL_GEOMETRY);
        Ok(Self::with_session(session, config, lexicon))
    }

    /// Wrap an existing session
    #[must_use]
    pub fn with_session(session: Session<'a>, config: GameConfig, lexicon: &'a Lexicon) -> Self {
        let mut app = Self {
            session,
            config,
            lexicon,
            messages: Vec::new(),
            should_quit: false,
            board_area: Rect::default(),
            flash_until: None,
            games_played: 0,
            log_seen: 0,
        };
        app.add_message(
            "Drag across adjacent tiles to spell a word. Hold a tile to make it wild.",
            MessageStyle::Info,
        );
        app
    }

    pub fn new_game(&mut self) {
        self.games_played += 1;
        let config = match &self.config.seed {
            Some(seed) => self.config.clone().with_seed(game_seed(Some(seed), self.games_played)),
            None => self.config.clone(),
        };
        match Session::new(&config, self.lexicon) {
            Ok(session) => {
                self.session = session.with_geometry(TERMINAL_GEOMETRY);
                self.log_seen = 0;
                self.flash_until = None;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Translate a terminal cell into board coordinates (cell centers)
    #[must_use]
    pub fn board_point(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.board_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| {
            Point::new(
                f64::from(column - area.x) + 0.5,
                f64::from(row - area.y) + 0.5,
            )
        })
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let point = self.board_point(mouse.column, mouse.row);
        match (mouse.kind, point) {
            (MouseEventKind::Down(MouseButton::Left), Some(point)) => {
                self.session.pointer_down_at(point, now);
            }
            (MouseEventKind::Down(MouseButton::Right), Some(point)) => {
                let hit = self
                    .session
                    .geometry()
                    .cell_at(point)
                    .and_then(|(row, col)| self.session.grid().id_at(row, col));
                if let Some(id) = hit
                    && !self.session.make_wild(id)
                {
                    self.add_message("Can't turn that tile wild", MessageStyle::Error);
                }
            }
            (MouseEventKind::Drag(MouseButton::Left), Some(point)) => {
                self.session.pointer_move(point, now);
            }
            (MouseEventKind::Up(MouseButton::Left), _) => {
                let preview = self.session.word_preview();
                if self.session.pointer_up(now).is_none() && preview.chars().count() > 1 {
                    self.add_message(&format!("{preview} is not a word"), MessageStyle::Error);
                }
            }
            _ => {}
        }
        self.sync(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('u') => {
                if !self.session.undo() {
                    self.add_message("Nothing to undo!", MessageStyle::Error);
                }
            }
            KeyCode::Char('h') => self.show_hint(),
            KeyCode::Esc => self.session.cancel(),
            _ => {}
        }
        self.sync(now);
    }

    /// Advance the long-press clock
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
        self.sync(now);
    }

    /// How long the event loop may block before the next tick is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .press_deadline()
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
            .min(IDLE_POLL)
    }

    fn show_hint(&mut self) {
        let candidates = find_words(self.session.grid(), self.lexicon);
        let text = match candidates.first() {
            Some(best) => format!(
                "Try {} ({} words on the board)",
                best.word.to_uppercase(),
                candidates.len()
            ),
            None => "No words left on the board".to_string(),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    /// Pull new session log lines and renderer events into the UI state
    fn sync(&mut self, now: Instant) {
        let fresh: Vec<String> = self.session.log()[self.log_seen..].to_vec();
        self.log_seen = self.session.log().len();
        for line in fresh {
            let style = if line.starts_with("Found") {
                MessageStyle::Success
            } else {
                MessageStyle::Info
            };
            self.add_message(&line, style);
        }

        let events = self.session.drain_events();
        if events.iter().any(|e| matches!(e, TileEvent::Popped { .. })) {
            self.flash_until = Some(now + FLASH);
            if self.session.is_over() {
                self.add_message(
                    "🎉 Board cleared! Press 'n' for a new game.",
                    MessageStyle::Success,
                );
            }
        }
        let collapsed = events
            .iter()
            .filter(|e| matches!(e, TileEvent::ColumnCollapsed { .. }))
            .count();
        if collapsed > 0 {
            self.add_message(&format!("{collapsed} column(s) collapsed"), MessageStyle::Info);
        }
    }

    #[must_use]
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let grid = app.session.grid();
            app.board_area = super::rendering::board_inner(f.area(), grid.rows(), grid.cols());
            super::rendering::ui(f, &app, Instant::now());
        })?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
