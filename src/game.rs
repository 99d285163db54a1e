//! # Game Controller
//!
//! Turn-taking glue over the rule engine: seat rotation, per-seat state, move
//! history, and scoring. The controller owns the authoritative board and
//! players; every placement goes through [`crate::rules::apply_move`], which
//! re-validates from scratch, so a stale or hand-crafted move can never
//! corrupt the state.
//!
//! The engine itself never tracks "whose turn" or "is the game over"; both
//! are derived here by polling [`crate::rules::legal_moves`], so the rules
//! layer stays a pure function of board and player state.

use crate::board::{Board, Color};
use crate::piece::PieceKind;
use crate::player::Player;
use crate::rules::{apply_move, legal_moves, IllegalMoveError, Move};

/// One applied placement, as recorded in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub color: Color,
    pub kind: PieceKind,
    pub orientation: usize,
    pub anchor: (usize, usize),
    /// Board cells the placement covered.
    pub cells: Vec<(usize, usize)>,
}

/// A running game: board, seats, rotation, history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: usize,
    history: Vec<PlayedMove>,
    over: bool,
}

impl Game {
    /// Starts a game with `num_players` seats (2 to 4) on the standard
    /// 20x20 board. Seats play in the fixed color order Blue, Yellow, Red,
    /// Green.
    pub fn new(num_players: usize) -> Self {
        assert!(
            (2..=4).contains(&num_players),
            "a game takes 2 to 4 players, got {num_players}"
        );
        Game {
            board: Board::standard(),
            players: Color::ALL[..num_players].iter().map(|&c| Player::new(c)).collect(),
            current: 0,
            history: Vec::new(),
            over: false,
        }
    }

    /// The standard four-player game.
    pub fn standard() -> Self {
        Self::new(4)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The color whose turn it is. Meaningless once the game is over.
    pub fn current_color(&self) -> Color {
        self.players[self.current].color
    }

    /// Seat state for a color. Panics on a color not seated in this game.
    pub fn player(&self, color: Color) -> &Player {
        self.players
            .iter()
            .find(|p| p.color == color)
            .expect("color is not seated in this game")
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Every legal move for the seat to act.
    pub fn legal_moves_for_current(&self) -> Vec<Move> {
        let p = &self.players[self.current];
        legal_moves(&self.board, p.color, &p.inventory, &p.frontier, p.first_move)
    }

    /// True when `color` still has at least one legal placement.
    pub fn has_any_move(&self, color: Color) -> bool {
        let p = self.player(color);
        !p.finished
            && !legal_moves(&self.board, p.color, &p.inventory, &p.frontier, p.first_move)
                .is_empty()
    }

    /// Applies a placement for the seat to act, then advances the turn to
    /// the next seat that can still move, skipping finished seats. When no
    /// seat can move the game is over.
    ///
    /// On error nothing changes, including the turn.
    pub fn play(
        &mut self,
        kind: PieceKind,
        orientation: usize,
        anchor: (usize, usize),
    ) -> Result<(), IllegalMoveError> {
        if self.over {
            return Err(IllegalMoveError::GameOver);
        }
        let seat = self.current;
        let color = self.players[seat].color;
        let mv = Move {
            color,
            kind,
            orientation,
            anchor,
        };

        let player = &mut self.players[seat];
        let first_move = player.first_move;
        let cells = apply_move(
            &mut self.board,
            &mv,
            &mut player.inventory,
            &mut player.frontier,
            first_move,
        )?;
        player.first_move = false;
        player.last_placed = Some(kind);
        player.placed_cells += cells.len();

        // A covered cell stops being empty for everyone: other seats' corner
        // frontiers shed it here, own-frontier upkeep already happened inside
        // apply_move.
        for (i, other) in self.players.iter_mut().enumerate() {
            if i != seat {
                other.frontier.remove_covered(&cells);
            }
        }

        self.history.push(PlayedMove {
            color,
            kind,
            orientation,
            anchor,
            cells,
        });
        self.advance_turn();
        Ok(())
    }

    /// Finds the next seat with a legal move, marking move-less seats as
    /// finished along the way. A finished seat never re-enters: opponents'
    /// pieces can only cover cells, so a player without a move can never
    /// regain one.
    fn advance_turn(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let idx = (self.current + step) % n;
            if self.players[idx].finished {
                continue;
            }
            if self.seat_has_move(idx) {
                self.current = idx;
                return;
            }
            self.players[idx].finished = true;
        }
        self.over = true;
    }

    fn seat_has_move(&self, idx: usize) -> bool {
        let p = &self.players[idx];
        if p.inventory.is_empty() {
            return false;
        }
        !legal_moves(&self.board, p.color, &p.inventory, &p.frontier, p.first_move).is_empty()
    }

    /// Current scores, in seat order.
    pub fn scores(&self) -> Vec<(Color, i32)> {
        self.players.iter().map(|p| (p.color, p.score())).collect()
    }

    /// The winning color once the game is over; `None` while it is running
    /// or when the top score is shared.
    pub fn winner(&self) -> Option<Color> {
        if !self.over {
            return None;
        }
        let best = self.players.iter().map(|p| p.score()).max()?;
        let mut winners = self.players.iter().filter(|p| p.score() == best);
        match (winners.next(), winners.next()) {
            (Some(p), None) => Some(p.color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::CornerFrontier;

    /// Opening used by several tests: each seat plays its monomino on a
    /// distinct board corner.
    fn open_with_monominoes(game: &mut Game) {
        game.play(PieceKind::One, 0, (0, 0)).unwrap();
        game.play(PieceKind::One, 0, (0, 19)).unwrap();
        game.play(PieceKind::One, 0, (19, 19)).unwrap();
        game.play(PieceKind::One, 0, (19, 0)).unwrap();
    }

    #[test]
    fn test_new_game() {
        let game = Game::standard();
        assert_eq!(game.players().len(), 4);
        assert_eq!(game.current_color(), Color::Blue);
        assert!(!game.is_over());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turn_rotation() {
        let mut game = Game::standard();
        assert_eq!(game.current_color(), Color::Blue);
        game.play(PieceKind::One, 0, (0, 0)).unwrap();
        assert_eq!(game.current_color(), Color::Yellow);
        game.play(PieceKind::One, 0, (0, 19)).unwrap();
        assert_eq!(game.current_color(), Color::Red);
    }

    #[test]
    fn test_first_move_flag_clears() {
        let mut game = Game::standard();
        assert!(game.player(Color::Blue).first_move);
        game.play(PieceKind::One, 0, (0, 0)).unwrap();
        assert!(!game.player(Color::Blue).first_move);
        // Blue's second move no longer needs a corner, but needs contact.
        game.play(PieceKind::One, 0, (0, 19)).unwrap();
        game.play(PieceKind::One, 0, (19, 19)).unwrap();
        game.play(PieceKind::One, 0, (19, 0)).unwrap();
        assert_eq!(game.current_color(), Color::Blue);
        game.play(PieceKind::Two, 0, (1, 1)).unwrap();
        assert_eq!(game.board().owner_at(1, 2), Some(Color::Blue));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::standard();
        game.play(PieceKind::One, 0, (0, 0)).unwrap();
        // Yellow tries the corner Blue already covered.
        let err = game.play(PieceKind::One, 0, (0, 0));
        assert_eq!(
            err,
            Err(IllegalMoveError::RuleViolation {
                kind: PieceKind::One,
                anchor: (0, 0),
            })
        );
        assert_eq!(game.current_color(), Color::Yellow);
        assert_eq!(game.player(Color::Yellow).inventory.len(), 21);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_no_regrowth() {
        let mut game = Game::standard();
        open_with_monominoes(&mut game);
        assert!(!game.player(Color::Blue).inventory.contains(PieceKind::One));
        let err = game.play(PieceKind::One, 0, (1, 1));
        assert_eq!(err, Err(IllegalMoveError::PieceNotHeld(PieceKind::One)));
        assert_eq!(game.player(Color::Blue).inventory.len(), 20);
    }

    #[test]
    fn test_history_records_cells() {
        let mut game = Game::standard();
        game.play(PieceKind::V3, 1, (0, 0)).unwrap();
        let entry = &game.history()[0];
        assert_eq!(entry.color, Color::Blue);
        assert_eq!(entry.kind, PieceKind::V3);
        assert_eq!(entry.cells.len(), 3);
        assert!(entry.cells.contains(&(0, 0)));
    }

    #[test]
    fn test_frontiers_stay_consistent_across_seats() {
        let mut game = Game::standard();
        open_with_monominoes(&mut game);
        game.play(PieceKind::Two, 0, (1, 1)).unwrap();
        for player in game.players() {
            assert_eq!(
                player.frontier,
                CornerFrontier::compute(game.board(), player.color),
                "frontier drifted for {}",
                player.color
            );
        }
    }

    #[test]
    fn test_scores_track_placed_cells() {
        let mut game = Game::standard();
        open_with_monominoes(&mut game);
        game.play(PieceKind::I5, 0, (1, 1)).unwrap();
        let scores = game.scores();
        assert_eq!(scores[0], (Color::Blue, 6));
        assert_eq!(scores[1], (Color::Yellow, 1));
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_two_player_game() {
        let mut game = Game::new(2);
        game.play(PieceKind::One, 0, (0, 0)).unwrap();
        assert_eq!(game.current_color(), Color::Yellow);
        game.play(PieceKind::One, 0, (19, 19)).unwrap();
        assert_eq!(game.current_color(), Color::Blue);
    }
}
