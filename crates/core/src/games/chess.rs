//! Chess Lite - full-board chess against a random-move computer
//!
//! Standard piece movement and check rules without castling or en passant.
//! Pawns reaching the last rank always become queens. The player is White;
//! Black replies after an [`OPPONENT_DELAY_MS`] pause with a uniformly
//! random legal move.
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Any legal White move | 1 |
//! | Capturing pawn / knight / bishop / rook / queen | 10 / 30 / 30 / 50 / 90 |
//! | Checkmating Black | 500 |
//! | Draw (stalemate, bare kings, move limit) | 100 |
//!
//! Squares are numbered `rank * 8 + file`, so `a1 = 0`, `h1 = 7`, `a8 = 56`.

use crate::module::{GameFault, GameModule};
use crate::rng::GameRng;
use crate::round::Outcome;
use crate::scoring::{CHESS_DRAW_BONUS, CHESS_MOVE_POINTS, CHESS_WIN_BONUS};
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Continuation, Delay, GameId, SessionState, OPPONENT_DELAY_MS};

/// Half-moves after which the game is declared drawn
pub const MAX_PLIES: u32 = 200;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns advance in
    fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Points for capturing this piece
    pub fn value(&self) -> u32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight | PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN-style letter, uppercase for White
    pub fn symbol(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: u8,
    pub to: u8,
}

fn square(file: i8, rank: i8) -> Option<u8> {
    ((0..8).contains(&file) && (0..8).contains(&rank)).then(|| (rank * 8 + file) as u8)
}

fn coords(sq: u8) -> (i8, i8) {
    ((sq % 8) as i8, (sq / 8) as i8)
}

/// Algebraic name of a square, e.g. `e4`
pub fn square_name(sq: u8) -> String {
    let (file, rank) = coords(sq);
    format!("{}{}", (b'a' + file as u8) as char, rank + 1)
}

/// Parse `e4` style square names
pub fn parse_square(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    square(file as i8 - b'a' as i8, rank as i8 - b'1' as i8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { squares: [None; 64] }
    }

    pub fn standard() -> Self {
        use PieceKind::*;
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Self::empty();
        for (file, kind) in back.into_iter().enumerate() {
            board.squares[file] = Some(Piece::new(Color::White, kind));
            board.squares[8 + file] = Some(Piece::new(Color::White, Pawn));
            board.squares[48 + file] = Some(Piece::new(Color::Black, Pawn));
            board.squares[56 + file] = Some(Piece::new(Color::Black, kind));
        }
        board
    }

    pub fn get(&self, sq: u8) -> Option<Piece> {
        self.squares.get(sq as usize).copied().flatten()
    }

    pub fn set(&mut self, sq: u8, piece: Option<Piece>) {
        if let Some(slot) = self.squares.get_mut(sq as usize) {
            *slot = piece;
        }
    }

    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        (0..64u8).find(|&sq| self.get(sq) == Some(Piece::new(color, PieceKind::King)))
    }

    /// Whether any piece of `by` attacks `target`
    pub fn is_attacked(&self, target: u8, by: Color) -> bool {
        let (file, rank) = coords(target);

        // A pawn of `by` attacks from one rank behind its forward direction
        let pawn_rank = rank - by.forward();
        for df in [-1, 1] {
            if let Some(sq) = square(file + df, pawn_rank) {
                if self.get(sq) == Some(Piece::new(by, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        let hits = |steps: &[(i8, i8)], kind: PieceKind| {
            steps.iter().any(|&(df, dr)| {
                square(file + df, rank + dr).is_some_and(|sq| self.get(sq) == Some(Piece::new(by, kind)))
            })
        };
        if hits(&KNIGHT_JUMPS[..], PieceKind::Knight) || hits(&KING_STEPS[..], PieceKind::King) {
            return true;
        }

        let slides = |rays: &[(i8, i8)], kinds: [PieceKind; 2]| {
            rays.iter().any(|&(df, dr)| {
                let (mut f, mut r) = (file + df, rank + dr);
                while let Some(sq) = square(f, r) {
                    if let Some(p) = self.get(sq) {
                        return p.color == by && kinds.contains(&p.kind);
                    }
                    f += df;
                    r += dr;
                }
                false
            })
        };
        slides(&ROOK_RAYS[..], [PieceKind::Rook, PieceKind::Queen])
            || slides(&BISHOP_RAYS[..], [PieceKind::Bishop, PieceKind::Queen])
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|k| self.is_attacked(k, color.other()))
    }

    /// Moves that obey piece movement, ignoring whether the king is left in check
    fn pseudo_moves(&self, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::with_capacity(48);
        for from in 0..64u8 {
            let Some(piece) = self.get(from) else { continue };
            if piece.color != color {
                continue;
            }
            let (file, rank) = coords(from);
            let mut push = |to: u8| moves.push(ChessMove { from, to });

            match piece.kind {
                PieceKind::Pawn => {
                    let fwd = color.forward();
                    if let Some(one) = square(file, rank + fwd) {
                        if self.get(one).is_none() {
                            push(one);
                            let home = if color == Color::White { 1 } else { 6 };
                            if rank == home {
                                if let Some(two) = square(file, rank + 2 * fwd) {
                                    if self.get(two).is_none() {
                                        push(two);
                                    }
                                }
                            }
                        }
                    }
                    for df in [-1, 1] {
                        if let Some(to) = square(file + df, rank + fwd) {
                            if self.get(to).is_some_and(|p| p.color != color) {
                                push(to);
                            }
                        }
                    }
                }
                PieceKind::Knight | PieceKind::King => {
                    let steps = if piece.kind == PieceKind::Knight {
                        &KNIGHT_JUMPS
                    } else {
                        &KING_STEPS
                    };
                    for &(df, dr) in steps {
                        if let Some(to) = square(file + df, rank + dr) {
                            if self.get(to).is_none_or(|p| p.color != color) {
                                push(to);
                            }
                        }
                    }
                }
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    let rays: &[(i8, i8)] = match piece.kind {
                        PieceKind::Bishop => &BISHOP_RAYS,
                        PieceKind::Rook => &ROOK_RAYS,
                        _ => &[
                            (1, 0),
                            (-1, 0),
                            (0, 1),
                            (0, -1),
                            (1, 1),
                            (1, -1),
                            (-1, 1),
                            (-1, -1),
                        ],
                    };
                    for &(df, dr) in rays {
                        let (mut f, mut r) = (file + df, rank + dr);
                        while let Some(to) = square(f, r) {
                            match self.get(to) {
                                None => push(to),
                                Some(p) => {
                                    if p.color != color {
                                        push(to);
                                    }
                                    break;
                                }
                            }
                            f += df;
                            r += dr;
                        }
                    }
                }
            }
        }
        moves
    }

    /// Moves that do not leave `color`'s king attacked
    pub fn legal_moves(&self, color: Color) -> Vec<ChessMove> {
        self.pseudo_moves(color)
            .into_iter()
            .filter(|mv| {
                let mut next = *self;
                next.apply(*mv);
                !next.in_check(color)
            })
            .collect()
    }

    /// Play `mv` without validation; returns the captured piece
    pub fn apply(&mut self, mv: ChessMove) -> Option<Piece> {
        let mut piece = self.get(mv.from)?;
        let captured = self.get(mv.to);
        let (_, rank) = coords(mv.to);
        if piece.kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
            piece.kind = PieceKind::Queen;
        }
        self.set(mv.from, None);
        self.set(mv.to, Some(piece));
        captured
    }

    /// Only the two kings remain
    pub fn bare_kings(&self) -> bool {
        self.squares.iter().flatten().all(|p| p.kind == PieceKind::King)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessView {
    pub squares: [Option<Piece>; 64],
    pub to_move: Color,
    pub in_check: bool,
    pub last_move: Option<ChessMove>,
    pub plies: u32,
    pub thinking: bool,
}

pub struct ChessLite {
    session: Session,
    board: Board,
    to_move: Color,
    plies: u32,
    last_move: Option<ChessMove>,
    rng: GameRng,
}

impl ChessLite {
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(GameId::ChessLite),
            board: Board::standard(),
            to_move: Color::White,
            plies: 0,
            last_move: None,
            rng: GameRng::new(seed),
        }
    }

    /// Start from an arbitrary position with White to move
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut game = Self::new(seed);
        game.session.start();
        game.board = board;
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    fn play(&mut self, mv: ChessMove) {
        let captured = self.board.apply(mv);
        if self.to_move == Color::White {
            let bounty = captured.map(|p| p.kind.value()).unwrap_or(0);
            self.session.award(CHESS_MOVE_POINTS + bounty);
        }
        self.plies += 1;
        self.last_move = Some(mv);
        self.to_move = self.to_move.other();
    }

    /// Resolve the round if the side to move is finished
    fn evaluate(&mut self) -> bool {
        let side = self.to_move;
        if self.board.legal_moves(side).is_empty() {
            let outcome = match (self.board.in_check(side), side) {
                (true, Color::Black) => Outcome::Won,
                (true, Color::White) => Outcome::Lost,
                (false, _) => Outcome::Draw,
            };
            self.finish(outcome);
            return true;
        }
        if self.board.bare_kings() || self.plies >= MAX_PLIES {
            self.finish(Outcome::Draw);
            return true;
        }
        false
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.session.award(CHESS_WIN_BONUS),
            Outcome::Draw => self.session.award(CHESS_DRAW_BONUS),
            Outcome::Lost => {}
        }
        self.session.resolve(outcome);
    }
}

impl GameModule for ChessLite {
    fn game_id(&self) -> GameId {
        GameId::ChessLite
    }

    fn start(&mut self) {
        self.session.start();
        self.board = Board::standard();
        self.to_move = Color::White;
        self.plies = 0;
        self.last_move = None;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        let Action::Move { from, to } = action else {
            return None;
        };
        if !self.session.is_active() || self.to_move != Color::White {
            return None;
        }
        let mv = ChessMove { from, to };
        if !self.board.legal_moves(Color::White).contains(&mv) {
            log::debug!("rejected move {}{}", square_name(from), square_name(to));
            return None;
        }

        self.play(mv);
        if self.evaluate() {
            return None;
        }
        Some(Delay::new(OPPONENT_DELAY_MS, Continuation::OpponentMove))
    }

    fn resume(&mut self, then: Continuation) -> Option<Delay> {
        if then != Continuation::OpponentMove || !self.session.is_active() || self.to_move != Color::Black {
            return None;
        }
        let moves = self.board.legal_moves(Color::Black);
        let mv = *self.rng.pick(&moves)?;
        self.play(mv);
        self.evaluate();
        None
    }

    fn state(&self) -> SessionState {
        self.session.state()
    }

    fn current_score(&self) -> u32 {
        self.session.score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        None
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: GameId::ChessLite,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Chess(ChessView {
                squares: self.board.squares,
                to_move: self.to_move,
                in_check: self.board.in_check(self.to_move),
                last_move: self.last_move,
                plies: self.plies,
                thinking: self.session.is_active() && self.to_move == Color::Black,
            }),
        }
    }
}
