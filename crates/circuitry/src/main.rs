mod logging;
mod snapshot;

use std::io::stdout;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use circuitry_background::{BackgroundState, FrameClock, generate_scene};
use circuitry_config::Config;
use circuitry_core::{Scene, Viewport};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Size},
    style::{Color, Stylize},
    text::Line,
};

/// Accent colour for key hints.
const ACCENT: Color = Color::Rgb(90, 160, 255);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = start(config, terminal);
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        log::warn!("failed to release mouse capture: {e}");
    }
    ratatui::restore();
    result
}

fn start(config: Config, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    let size = terminal.size()?;
    App::new(config, size).run(terminal)
}

/// Seed derived from the system clock.
fn fresh_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// The scene to start with: a saved one if configured and readable,
/// otherwise a freshly generated one.
fn initial_scene(config: &Config) -> Scene {
    if let Some(path) = &config.scene_file {
        match snapshot::load_scene(path) {
            Ok(scene) => return scene,
            Err(e) => log::warn!("{e}; generating a new scene"),
        }
    }
    generate_scene(config.seed.unwrap_or_else(fresh_seed))
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings loaded at startup.
    config: Config,
    /// Scene, camera and projection.
    background: BackgroundState,
    /// Animation time; stops while paused.
    clock: FrameClock,
    /// Wall-clock start, for resize throttling.
    started: Instant,
    /// Last one-off message (saved snapshot, errors).
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of the given size.
    pub fn new(config: Config, size: Size) -> Self {
        let viewport = Viewport::from_cells(
            size.width,
            size.height,
            config.cell_width_px,
            config.cell_height_px,
        );
        let mut background =
            BackgroundState::new(initial_scene(&config), viewport).with_mesh_scale(config.node_scale);
        background.set_pointer_follow(config.follow_pointer);

        let now = Instant::now();
        Self {
            running: false,
            config,
            background,
            clock: FrameClock::new(now),
            started: now,
            status: None,
        }
    }

    /// Run the application's main loop: one tick and one frame per iteration.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = Instant::now();
            let time = self.clock.advance(now);
            let wall_ms = now.duration_since(self.started).as_millis() as u64;
            self.background.tick(time, wall_ms);

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        self.background.render(frame);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Status
            Constraint::Fill(1),   // Scene
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let mut status = vec![
            "seed ".dark_gray(),
            self.background.scene().seed.to_string().fg(ACCENT),
        ];
        if self.clock.is_paused() {
            status.push("  paused".bold().fg(ACCENT));
        }
        if let Some(message) = &self.status {
            status.push(format!("  {message}").dark_gray());
        }
        frame.render_widget(Line::from(status), chunks[0]);

        if self.config.show_help {
            let follow = if self.background.follows_pointer() {
                " mouse off  "
            } else {
                " mouse on  "
            };
            let help = Line::from(vec![
                "q".bold().fg(ACCENT),
                " quit  ".dark_gray(),
                "space".bold().fg(ACCENT),
                " pause  ".dark_gray(),
                "r".bold().fg(ACCENT),
                " new scene  ".dark_gray(),
                "s".bold().fg(ACCENT),
                " save  ".dark_gray(),
                "m".bold().fg(ACCENT),
                follow.dark_gray(),
                "h".bold().fg(ACCENT),
                " hide help".dark_gray(),
            ])
            .centered();
            frame.render_widget(help, chunks[2]);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits up to one frame interval for the first event, then drains the rest.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let mut timeout = Duration::from_millis(self.config.frame_interval_ms());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(columns, rows) => {
                    self.background.request_resize(Viewport::from_cells(
                        columns,
                        rows,
                        self.config.cell_width_px,
                        self.config.cell_height_px,
                    ));
                }
                _ => {}
            }
            timeout = Duration::ZERO;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.clock.toggle_pause(Instant::now()),
            (_, KeyCode::Char('r')) => self.regenerate(),
            (_, KeyCode::Char('s')) => self.save_snapshot(),
            (_, KeyCode::Char('m')) => self.toggle_pointer_follow(),
            (_, KeyCode::Char('h')) => self.toggle_help(),
            _ => {}
        }
    }

    /// Track the pointer; cell centres are mapped to viewport pixels.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            let x = (mouse.column as f32 + 0.5) * self.config.cell_width_px;
            let y = (mouse.row as f32 + 0.5) * self.config.cell_height_px;
            self.background.point_at(x, y);
        }
    }

    /// Replace the scene with one from a new seed.
    fn regenerate(&mut self) {
        self.background.replace_scene(generate_scene(fresh_seed()));
        self.status = None;
    }

    /// Write the current scene to the snapshot directory.
    fn save_snapshot(&mut self) {
        let saved = snapshot::snapshot_dir()
            .and_then(|dir| snapshot::save_scene(self.background.scene(), &dir));
        self.status = Some(match saved {
            Ok(path) => format!("saved {}", path.display()),
            Err(e) => {
                log::error!("{e}");
                format!("save failed: {e}")
            }
        });
    }

    /// Toggle camera pointer tracking and remember the choice.
    fn toggle_pointer_follow(&mut self) {
        self.config.follow_pointer = !self.config.follow_pointer;
        self.background.set_pointer_follow(self.config.follow_pointer);
        self.persist_config();
    }

    /// Toggle the help line and remember the choice.
    fn toggle_help(&mut self) {
        self.config.show_help = !self.config.show_help;
        self.persist_config();
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            log::warn!("could not save settings: {e}");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
