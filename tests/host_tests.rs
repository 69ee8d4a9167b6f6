//! Session host: ordering, crash containment and recording

use funzone::core::games::{Memory, Snake, TicTacToe, Trivia};
use funzone::core::{GameFault, GameModule, GameSnapshot, MemoryHighScores, View};
use funzone::engine::{GameHost, HostStatus, Scoreboard, SessionReport};
use funzone::types::{Action, Delay, Direction, GameId, SessionState, SNAKE_STEP_MS};

/// Snake that blows up on a chosen tick
struct Faulty {
    inner: Snake,
    ticks: u32,
    blow_at: u32,
    panic: bool,
}

impl Faulty {
    fn new(blow_at: u32, panic: bool) -> Self {
        Self {
            inner: Snake::new(5),
            ticks: 0,
            blow_at,
            panic,
        }
    }
}

impl GameModule for Faulty {
    fn game_id(&self) -> GameId {
        GameId::Snake
    }

    fn start(&mut self) {
        self.ticks = 0;
        self.inner.start();
    }

    fn tick(&mut self, dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        self.ticks += 1;
        if self.ticks == self.blow_at {
            if self.panic {
                panic!("snake exploded");
            }
            return Err(GameFault::Invariant("snake left the board"));
        }
        self.inner.tick(dt_ms)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        self.inner.handle_action(action)
    }

    fn admits(&self, action: &Action) -> bool {
        self.inner.admits(action)
    }

    fn state(&self) -> SessionState {
        self.inner.state()
    }

    fn current_score(&self) -> u32 {
        self.inner.current_score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        self.inner.tick_interval_ms()
    }

    fn snapshot(&self) -> GameSnapshot {
        self.inner.snapshot()
    }
}

#[test]
fn test_panicking_module_crashes_only_its_session() {
    let mut host = GameHost::new(Box::new(Faulty::new(3, true)));
    host.start().unwrap();
    host.step(SNAKE_STEP_MS as u64 * 2, None);
    let before = host.snapshot().clone();
    assert_eq!(before.frame, 2);

    assert_eq!(host.step(SNAKE_STEP_MS as u64, None), None);
    assert_eq!(host.status(), HostStatus::Crashed);
    assert!(host.crash_reason().is_some_and(|r| r.contains("snake exploded")));
    assert_eq!(host.snapshot(), &before);
    assert_eq!(host.until_next_event_ms(), None);

    // Nothing more happens, and no report is ever produced
    assert_eq!(host.step(10_000, Some(Action::Steer(Direction::Up))), None);
    assert_eq!(host.snapshot(), &before);

    // The shell can still restart it
    host.restart().unwrap();
    assert_eq!(host.status(), HostStatus::Running);
    assert_eq!(host.crash_reason(), None);
}

#[test]
fn test_fault_result_crashes_the_session() {
    let mut host = GameHost::new(Box::new(Faulty::new(1, false)));
    host.start().unwrap();
    host.step(SNAKE_STEP_MS as u64, None);
    assert_eq!(host.status(), HostStatus::Crashed);
    assert!(host.crash_reason().is_some_and(|r| r.contains("left the board")));
}

#[test]
fn test_timer_expiry_beats_input_in_the_same_step() {
    let mut host = GameHost::new(Box::new(Trivia::new(9)));
    host.start().unwrap();
    for _ in 0..14 {
        assert_eq!(host.step(1000, None), None);
    }
    assert_eq!(host.snapshot().seconds_left(), Some(1));

    let report = host.step(1000, Some(Action::Choose(0))).expect("round ends");
    assert_eq!(report.outcome, SessionState::Lost);
    assert_eq!(report.score, 0);
}

#[test]
fn test_teardown_drops_pending_continuations() {
    let mut host = GameHost::new(Box::new(TicTacToe::new(2)));
    host.start().unwrap();
    host.step(0, Some(Action::Pick(4)));
    assert_eq!(host.until_next_event_ms(), Some(500));

    host.teardown();
    assert_eq!(host.status(), HostStatus::Idle);
    assert_eq!(host.until_next_event_ms(), None);

    host.start().unwrap();
    host.step(1000, None);
    let View::TicTacToe(board) = &host.snapshot().view else {
        panic!("expected tic-tac-toe view");
    };
    assert!(board.cells.iter().all(Option::is_none), "stale opponent move leaked into the new session");
}

#[test]
fn test_memory_mismatch_flips_back_after_delay() {
    let mut host = GameHost::new(Box::new(Memory::new(4)));
    host.start().unwrap();
    let View::Memory(view) = &host.snapshot().view else {
        panic!("expected memory view");
    };
    let first = view.cards[0].symbol;
    let other = (1..16).find(|&i| view.cards[i].symbol != first).unwrap() as u8;

    host.step(0, Some(Action::Pick(0)));
    host.step(0, Some(Action::Pick(other)));
    // Locked while both cards show
    host.step(0, Some(Action::Pick(15)));
    let up = |host: &GameHost| match &host.snapshot().view {
        View::Memory(v) => v.cards.iter().filter(|c| c.face_up).count(),
        _ => unreachable!(),
    };
    assert_eq!(up(&host), 2);
    host.step(1000, None);
    assert_eq!(up(&host), 0);
}

#[test]
fn test_report_is_emitted_once() {
    let mut host = GameHost::new(Box::new(Trivia::new(1)));
    host.start().unwrap();
    let mut reports: Vec<SessionReport> = Vec::new();
    for _ in 0..40 {
        reports.extend(host.step(1000, None));
    }
    assert_eq!(reports.len(), 1);
    assert_eq!(host.status(), HostStatus::Finished(SessionState::Lost));
}

#[test]
fn test_scoreboard_zero_score_skips_leaderboard() {
    let mut board = Scoreboard::new(Box::new(MemoryHighScores::new()));
    let report = SessionReport {
        game: GameId::Memory,
        outcome: SessionState::Won,
        score: 0,
        frames: 0,
        elapsed_ms: 90_000,
    };
    let recorded = board.record(&report, "You", "2024-05-01");
    assert!(!recorded.new_high_score);
    assert_eq!(recorded.rank, None);
    assert!(board.leaderboards().top(GameId::Memory).is_empty());

    let recorded = board.record(&SessionReport { score: 92, ..report }, "You", "2024-05-01");
    assert!(recorded.new_high_score);
    assert_eq!(recorded.rank, Some(1));
    assert_eq!(board.best(GameId::Memory), 92);
}
