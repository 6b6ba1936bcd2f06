//! Game structure.

use std::fmt::{self, Display};

use crate::board::Board;
use crate::coretypes::{
    CastleSide, Color, Move, MoveCount, MoveInfo, MoveKind, PieceId, PieceKind, Square,
};
use crate::error::{self, ErrorKind};
use crate::movegen;
use crate::movelist::{Destinations, MoveHistory, MoveList};
use crate::notation;
use crate::player::Player;

/// Game contains information for an in progress game:
/// The board, both players, whose turn it is, the turn number,
/// and the notation of every move played so far.
///
/// The turn number counts full move pairs. It is 1 for the first White move
/// and increases each time White is about to move again.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active_color: Color,
    turn: MoveCount,
    history: MoveHistory,
}

impl Game {
    /// Create a new game in the standard chess start position.
    pub fn new() -> Self {
        Self::with_players("White", "Black")
    }

    /// Create a new game in the standard start position with named players.
    pub fn with_players(white: impl Into<String>, black: impl Into<String>) -> Self {
        let mut game = Self {
            board: Board::new(),
            players: [Player::new(Color::White, white), Player::new(Color::Black, black)],
            active_color: Color::Black,
            turn: 0,
            history: MoveHistory::new(),
        };
        game.initialize();
        game
    }

    /// Create a game from an arbitrary board, with `active_color` to move on turn 1.
    pub fn from_board(board: Board, active_color: Color) -> Self {
        Self {
            board,
            players: [
                Player::new(Color::White, "White"),
                Player::new(Color::Black, "Black"),
            ],
            active_color,
            turn: 1,
            history: MoveHistory::new(),
        }
    }

    /// Discards the board and history and sets up the standard start position
    /// with White to move on turn 1.
    pub fn initialize(&mut self) {
        self.board = Board::start_position();
        self.history.clear();
        self.turn = 0;
        self.set_active_color(Color::White);
    }

    /// Resets the game then replays whitespace separated notation tokens.
    ///
    /// Each token is played as the first of the active player's moves whose
    /// notation matches it exactly, so tokens that two pieces could share
    /// resolve to the piece found first from a1 to h8.
    /// Replay stops at the first token that matches no move, leaving the game
    /// at the position reached before it.
    pub fn initialize_from_notation(&mut self, moves: &str) -> error::Result<()> {
        self.initialize();
        for token in moves.split_whitespace() {
            self.play(token)?;
        }
        Ok(())
    }

    /// Sets the color to move. The turn number advances when White is set to move.
    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
        if color == Color::White {
            self.turn = self.turn.saturating_add(1);
        }
    }

    /// Immutable Getters.
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn active_color(&self) -> Color {
        self.active_color
    }
    pub fn turn(&self) -> MoveCount {
        self.turn
    }
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.players[0],
            Color::Black => &self.players[1],
        }
    }
    pub fn active_player(&self) -> &Player {
        self.player(self.active_color)
    }

    /// Every pseudo-legal move of the active player.
    pub fn moves(&self) -> MoveList {
        self.active_player().all_moves(&self.board, self.active_color)
    }

    /// Destinations of one piece, empty if it is not that piece's turn.
    pub fn piece_moves(&self, id: PieceId) -> Destinations {
        movegen::piece_moves(&self.board, id, self.active_color)
    }

    /// Notation token `move_` would be recorded as.
    pub fn notation(&self, move_: Move) -> Option<String> {
        notation::move_notation(&self.board, move_.piece, move_.to)
    }

    /// First move of the active player whose notation equals `token`.
    pub fn find_move(&self, token: &str) -> Option<Move> {
        self.moves()
            .into_iter()
            .find(|&move_| self.notation(move_).as_deref() == Some(token))
    }

    /// Plays the move named by a notation token.
    pub fn play(&mut self, token: &str) -> error::Result<MoveInfo> {
        let move_ = self.find_move(token).ok_or_else(|| {
            (
                ErrorKind::GameUnresolvableMove,
                format!("{token:?} at turn {} for {}", self.turn, self.active_color),
            )
        })?;
        self.make_move(move_)
    }

    /// Moves a piece to `target`. A missing target does nothing and returns None.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        target: Option<Square>,
    ) -> error::Result<Option<MoveInfo>> {
        match target {
            Some(to) => self.make_move(Move::new(id, to)).map(Some),
            None => Ok(None),
        }
    }

    /// Apply a move as one ply.
    ///
    /// The move is checked before anything changes: the piece must be on the
    /// board, belong to the active color, and `to` must be one of its
    /// pseudo-legal destinations. On success the piece is relocated, along
    /// with its rook for a castle, the notation is recorded under the current
    /// turn, and the other color becomes active. On error the game is unchanged.
    pub fn make_move(&mut self, move_: Move) -> error::Result<MoveInfo> {
        let Move { piece: id, to } = move_;
        let piece = *self.board.piece(id).ok_or(ErrorKind::GamePieceNotOnBoard)?;
        let from = piece
            .square()
            .ok_or((ErrorKind::GamePieceNotOnBoard, format!("{piece} was captured")))?;

        if !piece.can_move(self.active_color) {
            return Err((
                ErrorKind::GameWrongTurn,
                format!("{piece} on {from}, {} to move", self.active_color),
            )
                .into());
        }
        if !self.piece_moves(id).contains(&to) {
            return Err((ErrorKind::GameIllegalMove, format!("{piece} {from}{to}")).into());
        }

        let notation = self
            .notation(move_)
            .ok_or(ErrorKind::GamePieceNotOnBoard)?;
        let castle = match piece.piece_kind() {
            PieceKind::King => {
                CastleSide::from_king_delta(to.col() as i8 - from.col() as i8)
            }
            _ => None,
        };
        let castling_rook = castle.and_then(|side| self.board.castling_rook(piece.color(), side));

        let captured = self.board.place(id, to);
        if let Some(moved) = self.board.piece_mut(id) {
            moved.has_moved = true;
        }
        if let (Some(side), Some(rook)) = (castle, castling_rook) {
            self.board.place(rook, Square::from((side.rook_to(), from.rank())));
            if let Some(rook) = self.board.piece_mut(rook) {
                rook.has_moved = true;
            }
        }

        let move_kind = match (castle, captured) {
            (Some(side), _) => MoveKind::Castle(side),
            (None, Some(captured)) => self
                .board
                .piece(captured)
                .map_or(MoveKind::Quiet, |p| MoveKind::Capture(p.piece_kind())),
            (None, None) => MoveKind::Quiet,
        };

        let turn = self.turn;
        self.history.record(turn, notation.clone());
        self.set_active_color(!piece.color());

        Ok(MoveInfo {
            piece: id,
            color: piece.color(),
            piece_kind: piece.piece_kind(),
            from,
            to,
            move_kind,
            notation,
            turn,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(
            f,
            "Turn {}: {} ({}) to move",
            self.turn,
            self.active_color,
            self.active_player().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Square::*;

    fn at(game: &Game, square: Square) -> PieceId {
        game.board().occupant(square).unwrap()
    }

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.active_color(), Color::White);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.moves().len(), 20);
        assert!(game.history().is_empty());
        assert_eq!(game.player(Color::Black).name(), "Black");
    }

    #[test]
    fn set_active_color_counts_turns() {
        let mut game = Game::new();
        game.set_active_color(Color::Black);
        assert_eq!(game.turn(), 1);
        game.set_active_color(Color::White);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn pawn_push() {
        let mut game = Game::new();
        let pawn = at(&game, E2);
        let info = game.make_move(Move::new(pawn, E4)).unwrap();

        assert_eq!(info.notation(), "e4");
        assert_eq!(info.move_kind(), MoveKind::Quiet);
        assert_eq!(info.turn(), 1);
        assert!(game.board().occupant(E2).is_none());
        let moved = game.board().piece_at(E4).unwrap();
        assert_eq!((moved.color(), moved.piece_kind()), (Color::White, PieceKind::Pawn));
        assert!(moved.has_moved());
        assert_eq!(game.active_color(), Color::Black);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.history().get(1).unwrap().as_slice(), &["e4"]);
    }

    #[test]
    fn wrong_turn_is_rejected_without_change() {
        let mut game = Game::new();
        let before = game.clone();
        let pawn = at(&game, E7);
        let err = game.make_move(Move::new(pawn, E5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GameWrongTurn);
        assert_eq!(game, before);
    }

    #[test]
    fn illegal_destination_is_rejected_without_change() {
        let mut game = Game::new();
        let before = game.clone();
        let rook = at(&game, A1);
        let err = game.make_move(Move::new(rook, A5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GameIllegalMove);
        assert_eq!(game, before);
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut game = Game::new();
        let before = game.clone();
        let knight = at(&game, G1);
        assert_eq!(game.move_piece(knight, None).unwrap(), None);
        assert_eq!(game, before);

        let info = game.move_piece(knight, Some(F3)).unwrap().unwrap();
        assert_eq!(info.notation(), "Nf3");
    }

    #[test]
    fn capture_takes_piece_off_board() {
        let mut game = Game::new();
        game.initialize_from_notation("e4 d5").unwrap();
        let material = game.board().material(Color::Black);

        let info = game.play("exd5").unwrap();
        assert_eq!(info.captured(), Some(PieceKind::Pawn));
        assert_eq!(game.board().material(Color::Black), material - 1);
        let captured = game
            .board()
            .pieces()
            .filter(|(_, p)| p.is_captured())
            .count();
        assert_eq!(captured, 1);
    }

    #[test]
    fn kingside_castle_is_one_ply() {
        let mut game = Game::new();
        game.initialize_from_notation("e4 e5 Nf3 Nc6 Bc4 Bc5").unwrap();
        assert_eq!(game.turn(), 4);
        assert_eq!(game.active_color(), Color::White);

        let king = at(&game, E1);
        let rook = at(&game, H1);
        let info = game.make_move(Move::new(king, G1)).unwrap();

        assert_eq!(info.move_kind(), MoveKind::Castle(CastleSide::King));
        assert_eq!(info.notation(), "O-Og1");
        assert_eq!(game.board().occupant(G1), Some(king));
        assert_eq!(game.board().occupant(F1), Some(rook));
        assert!(game.board().occupant(E1).is_none());
        assert!(game.board().occupant(H1).is_none());
        assert!(game.board().piece(king).unwrap().has_moved());
        assert!(game.board().piece(rook).unwrap().has_moved());

        assert_eq!(game.active_color(), Color::Black);
        assert_eq!(game.turn(), 4);
        assert_eq!(game.history().get(4).unwrap().as_slice(), &["O-Og1"]);
        assert_eq!(game.history().plies(), 7);
    }

    #[test]
    fn queenside_castle_moves_a_rook() {
        let mut board = Board::new();
        let king = board.add_piece(Color::Black, PieceKind::King, E8).unwrap();
        let rook = board.add_piece(Color::Black, PieceKind::Rook, A8).unwrap();
        board.add_piece(Color::White, PieceKind::King, E1).unwrap();
        let mut game = Game::from_board(board, Color::Black);

        let info = game.play("O-O-Oc8").unwrap();
        assert_eq!(info.move_(), Move::new(king, C8));
        assert_eq!(game.board().occupant(D8), Some(rook));
        assert!(game.board().occupant(A8).is_none());
        assert_eq!(game.active_color(), Color::White);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.history().get(1).unwrap().as_slice(), &["O-O-Oc8"]);
    }

    #[test]
    fn unresolvable_token_stops_replay() {
        let mut game = Game::new();
        let err = game.initialize_from_notation("e4 e5 Ke3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GameUnresolvableMove);
        assert!(err.to_string().contains("\"Ke3\" at turn 2"));
        assert_eq!(game.history().tokens(), "e4 e5");
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn turn_number_saturates() {
        let mut game = Game::new();
        for _ in 0..=MoveCount::MAX {
            game.set_active_color(Color::White);
        }
        assert_eq!(game.turn(), MoveCount::MAX);
        game.set_active_color(Color::Black);
        assert_eq!(game.turn(), MoveCount::MAX);
    }

    #[test]
    fn replayed_tokens_can_pick_other_piece() {
        let mut game = Game::new();
        game.initialize_from_notation("d4 d5 Nf3 Nf6").unwrap();
        let f3_knight = at(&game, F3);
        let info = game.make_move(Move::new(f3_knight, D2)).unwrap();
        assert_eq!(info.notation(), "Nd2");

        let mut replayed = Game::new();
        replayed.initialize_from_notation(&game.history().tokens()).unwrap();
        assert_eq!(replayed.history(), game.history());
        assert_eq!(replayed.board().occupant(F3), Some(f3_knight));
        assert!(replayed.board().occupant(B1).is_none());
        assert_ne!(replayed.board(), game.board());
    }

    #[test]
    fn initialize_resets_everything() {
        let mut game = Game::with_players("Ada", "Bob");
        game.initialize_from_notation("d4 d5 c4").unwrap();
        game.initialize();
        assert_eq!(game, Game::with_players("Ada", "Bob"));
    }
}
