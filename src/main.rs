//! Funzone Arcade (default binary).
//!
//! Opens the hub in the terminal, or jumps straight into one game when its
//! id is given. Uses crossterm for input and the framebuffer renderer from
//! `funzone-term`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, warn};

use funzone::app::{App, AppFlow};
use funzone::core::{HighScoreStore, MemoryHighScores};
use funzone::engine::{EngineConfig, Scoreboard};
use funzone::store::JsonHighScores;
use funzone::term::{restore_terminal, FrameBuffer, TerminalRenderer, Viewport};
use funzone::types::GameId;

#[derive(Parser)]
#[command(name = "funzone")]
#[command(about = "Terminal arcade: runner, snake and puzzle mini-games")]
struct Args {
    /// Game to start directly (e.g. `snake`, `tic-tac-toe`)
    game: Option<String>,

    /// RNG seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Name written to the leaderboard
    #[arg(long)]
    player: Option<String>,

    /// Directory holding highscores.json and funzone.log
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Local two-player tic-tac-toe
    #[arg(long)]
    hot_seat: bool,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for game in GameId::ALL {
            let info = game.info();
            println!("{:<14} {:<16} {:<10} {}", game.as_str(), info.name, info.category, info.description);
        }
        return Ok(());
    }

    let mut config = EngineConfig::from_env();
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(player) = args.player {
        config.player = player.trim().to_string();
    }
    if args.data_dir.is_some() {
        config.data_dir = args.data_dir;
    }
    config.hot_seat |= args.hot_seat;
    config.validate()?;

    let start_game = match args.game.as_deref() {
        Some(id) => Some(id.parse::<GameId>().context("try --list for the catalog")?),
        None => None,
    };

    init_logging(&config);
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore_terminal();
        error!("{panic}");
        default_hook(panic);
    }));

    let (store, notice) = open_store(&config);
    let mut app = App::new(config.clone(), Scoreboard::new(store));
    if let Some(notice) = notice {
        app.set_notice(notice);
    }
    if let Some(game) = start_game {
        app.launch(game);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, config.frame_ms);

    // Always try to restore terminal state; a panic restores it on drop.
    let _ = term.exit();
    result
}

/// Log to `funzone.log` next to the high scores; the screen belongs to the game
fn init_logging(config: &EngineConfig) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    let file = config.high_score_path().and_then(|path| {
        let dir = path.parent()?.to_path_buf();
        fs::create_dir_all(&dir).ok()?;
        OpenOptions::new().create(true).append(true).open(dir.join("funzone.log")).ok()
    });
    match file {
        Some(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

fn open_store(config: &EngineConfig) -> (Box<dyn HighScoreStore>, Option<String>) {
    let Some(path) = config.high_score_path() else {
        warn!("no data directory; high scores kept in memory");
        return (
            Box::new(MemoryHighScores::new()),
            Some("No data directory: high scores will not be saved".to_string()),
        );
    };
    match JsonHighScores::open(&path) {
        Ok(store) => {
            info!("high scores at {}", path.display());
            (Box::new(store), None)
        }
        Err(err) => {
            warn!("could not open {}: {err}; high scores kept in memory", path.display());
            (
                Box::new(MemoryHighScores::new()),
                Some(format!("High scores will not be saved: {err}")),
            )
        }
    }
}

fn run(term: &mut TerminalRenderer, app: &mut App, frame_ms: u32) -> Result<()> {
    let frame = Duration::from_millis(frame_ms as u64);
    let started = Instant::now();
    let mut last_step = Instant::now();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Time first, so a timer that expired before a key press wins.
        app.advance(take_elapsed_ms(&mut last_step));

        if app.wants_redraw(started.elapsed().as_millis() as u64) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render_into(Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }

        // Input with timeout until the next frame or game event.
        let timeout = app
            .until_next_event_ms()
            .map(|ms| Duration::from_millis(ms).min(frame))
            .unwrap_or(frame);

        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.advance(take_elapsed_ms(&mut last_step));
                if app.handle_key(key) == AppFlow::Quit {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                app.invalidate();
            }
            _ => {}
        }
    }
}

/// Whole milliseconds since `last`; the remainder carries into the next call
fn take_elapsed_ms(last: &mut Instant) -> u64 {
    let ms = last.elapsed().as_millis() as u64;
    *last += Duration::from_millis(ms);
    ms
}
