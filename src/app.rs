//! Arcade shell: the hub and the active session.
//!
//! Time-agnostic and terminal-free. The binary feeds it elapsed milliseconds
//! and key presses, then asks it to paint into a framebuffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

use funzone_engine::{create_module, today, EngineConfig, GameHost, HostStatus, Recorded, Scoreboard};
use funzone_input::{command_for, Command, KeyMapper};
use funzone_term::{
    fingerprint, render_hub_into, FrameBuffer, GameScreen, HubEntry, HubView, Hud, RenderThrottle, Viewport,
};
use funzone_types::GameId;

/// Non-animating screens are repainted at least this often
const IDLE_REDRAW_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFlow {
    Continue,
    Quit,
}

struct Session {
    host: GameHost,
    keys: KeyMapper,
    recorded: Option<Recorded>,
}

enum Screen {
    Hub,
    Playing(Box<Session>),
}

pub struct App {
    config: EngineConfig,
    scoreboard: Scoreboard,
    screen: Screen,
    selected: usize,
    seed: u64,
    launches: u64,
    notice: Option<String>,
    throttle: RenderThrottle,
    dirty: bool,
}

impl App {
    pub fn new(config: EngineConfig, scoreboard: Scoreboard) -> Self {
        let seed = config.seed_or_clock();
        Self {
            config,
            scoreboard,
            screen: Screen::Hub,
            selected: 0,
            seed,
            launches: 0,
            notice: None,
            throttle: RenderThrottle::new(IDLE_REDRAW_MS),
            dirty: true,
        }
    }

    /// Message shown on the hub, e.g. when scores are not persisted
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.dirty = true;
    }

    pub fn playing(&self) -> Option<GameId> {
        match &self.screen {
            Screen::Playing(session) => Some(session.host.game()),
            Screen::Hub => None,
        }
    }

    pub fn host(&self) -> Option<&GameHost> {
        match &self.screen {
            Screen::Playing(session) => Some(&session.host),
            Screen::Hub => None,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Start `game` with a fresh seed
    pub fn launch(&mut self, game: GameId) {
        let seed = self.seed.wrapping_add(self.launches);
        self.launches += 1;
        let module = create_module(game, seed, self.config.module_options());
        let mut host = GameHost::new(module);
        if let Err(err) = host.start() {
            warn!("{} failed to start: {err}", game.as_str());
        }
        self.screen = Screen::Playing(Box::new(Session {
            host,
            keys: KeyMapper::new(),
            recorded: None,
        }));
        self.throttle.reset();
        self.dirty = true;
    }

    fn back_to_hub(&mut self) {
        if let Screen::Playing(session) = &mut self.screen {
            session.host.teardown();
        }
        self.screen = Screen::Hub;
        self.dirty = true;
    }

    /// Advance the active session by `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.step(elapsed_ms, None);
    }

    /// Milliseconds until the active session next needs time, if ever
    pub fn until_next_event_ms(&self) -> Option<u64> {
        self.host().and_then(GameHost::until_next_event_ms)
    }

    fn step(&mut self, elapsed_ms: u64, action: Option<funzone_types::Action>) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        if let Some(report) = session.host.step(elapsed_ms, action) {
            let recorded = self.scoreboard.record(&report, &self.config.player, &today());
            session.recorded = Some(recorded);
            self.dirty = true;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppFlow {
        self.dirty = true;
        match self.playing() {
            None => self.hub_key(key),
            Some(game) => self.game_key(game, key),
        }
    }

    fn hub_key(&mut self, key: KeyEvent) -> AppFlow {
        let count = GameId::ALL.len();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppFlow::Quit,
                _ => AppFlow::Continue,
            };
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return AppFlow::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.selected = (self.selected + count - 1) % count,
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1) % count,
            KeyCode::Enter => self.launch(GameId::ALL[self.selected]),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                if let Some(&game) = GameId::ALL.get(index) {
                    self.selected = index;
                    self.launch(game);
                }
            }
            _ => {}
        }
        AppFlow::Continue
    }

    fn game_key(&mut self, game: GameId, key: KeyEvent) -> AppFlow {
        match command_for(game, key) {
            Some(Command::Quit) => return AppFlow::Quit,
            Some(Command::Back) => {
                self.back_to_hub();
                return AppFlow::Continue;
            }
            Some(Command::Restart) => {
                self.launch(game);
                return AppFlow::Continue;
            }
            None => {}
        }

        let Screen::Playing(session) = &mut self.screen else {
            return AppFlow::Continue;
        };
        match session.host.status() {
            HostStatus::Running => {
                if let Some(action) = session.keys.map(game, key) {
                    self.step(0, Some(action));
                }
            }
            HostStatus::Finished(_) | HostStatus::Crashed if key.code == KeyCode::Enter => {
                info!("restarting {}", game.as_str());
                self.launch(game);
            }
            _ => {}
        }
        AppFlow::Continue
    }

    /// Whether the screen should be repainted at `now_ms`
    pub fn wants_redraw(&mut self, now_ms: u64) -> bool {
        let dirty = std::mem::take(&mut self.dirty);
        match &self.screen {
            Screen::Hub => dirty,
            Screen::Playing(session) => {
                let host = &session.host;
                let animating = host.is_running() && host.game().is_continuous();
                let fp = fingerprint(host.snapshot());
                self.throttle.should_draw(now_ms, fp, animating || dirty)
            }
        }
    }

    /// Force a full repaint on the next frame
    pub fn invalidate(&mut self) {
        self.dirty = true;
        self.throttle.reset();
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.screen {
            Screen::Hub => {
                let entries = GameId::ALL
                    .iter()
                    .map(|&game| HubEntry {
                        game,
                        best: self.scoreboard.best(game),
                    })
                    .collect();
                let view = HubView {
                    entries,
                    selected: self.selected,
                    player: &self.config.player,
                    recent: self.scoreboard.leaderboards().recent().collect(),
                    notice: self.notice.as_deref(),
                };
                render_hub_into(&view, viewport, fb);
            }
            Screen::Playing(session) => {
                let host = &session.host;
                let game = host.game();
                let pending = session.keys.pending_text();
                let hud = Hud {
                    player: &self.config.player,
                    best: self.scoreboard.best(game),
                    leaders: self.scoreboard.leaderboards().top(game),
                    crash: host.crash_reason(),
                    pending_text: (game == GameId::ChessLite).then_some(pending),
                    new_best: session.recorded.is_some_and(|r| r.new_high_score),
                };
                GameScreen.render_into(host.snapshot(), &hud, viewport, fb);
            }
        }
    }
}
