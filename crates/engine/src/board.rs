use crate::piece::{Grid, Piece};
use crate::types::{EngineError, Move, PieceKind, Side, Square};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Board {
    pub pieces: Vec<Piece>,
    prev_grid: Grid,
}

impl Board {
    /// Standard 32-piece starting position.
    pub fn new() -> Self {
        let mut pieces = Vec::new();
        for side in [Side::White, Side::Black] {
            for kind in PieceKind::ALL {
                for square in Piece::starting_squares(kind, side) {
                    pieces.push(Piece::new(side, kind, square));
                }
            }
        }
        Self::from_pieces(pieces)
    }

    /// Build a board from the piece-placement field of a FEN string.
    ///
    /// Ranks are listed 8th rank first, separated by '/'. Digits 1-8 expand
    /// to that many empty squares. Trailing FEN fields (side to move,
    /// castling rights, en passant, clocks) are accepted as input but not
    /// parsed into board state.
    pub fn from_placement(input: &str) -> Result<Self, EngineError> {
        let placement = input.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(EngineError::BadPlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::new();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx as i8; // the string starts at the far side from White
            let mut col: i8 = 0;

            for ch in rank_str.chars() {
                match ch {
                    '1'..='8' => {
                        col += ch.to_digit(10).unwrap() as i8;
                    }
                    _ => {
                        if col >= 8 {
                            return Err(EngineError::BadPlacement(format!(
                                "rank {} describes more than 8 squares",
                                8 - rank_idx
                            )));
                        }
                        let (side, kind) = piece_from_symbol(ch)?;
                        pieces.push(Piece::new(side, kind, Square::new(row, col)));
                        col += 1;
                    }
                }
            }

            if col != 8 {
                return Err(EngineError::BadPlacement(format!(
                    "rank {} describes {} of 8 squares",
                    8 - rank_idx,
                    col
                )));
            }
        }

        Ok(Self::from_pieces(pieces))
    }

    fn from_pieces(pieces: Vec<Piece>) -> Self {
        let mut board = Self {
            pieces,
            prev_grid: [[None; 8]; 8],
        };
        board.prev_grid = board.grid();
        board
    }

    /// Re-index the piece collection by square. The grid is recomputed on
    /// every call so it can never drift from `pieces`.
    pub fn grid(&self) -> Grid {
        let mut grid: Grid = [[None; 8]; 8];
        for piece in &self.pieces {
            grid[piece.square.row as usize][piece.square.col as usize] = Some(*piece);
        }
        grid
    }

    /// Snapshot of the grid captured when the board was constructed. No
    /// operation refreshes it afterwards.
    pub fn prev_grid(&self) -> &Grid {
        &self.prev_grid
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces.iter().find(|p| p.square == square).copied()
    }

    /// Pseudo-legal destinations for the piece on `square`; empty when the
    /// square is vacant.
    pub fn moves_from(&self, square: Square) -> Vec<Square> {
        match self.piece_at(square) {
            Some(piece) => piece.pseudo_moves(&self.grid(), &self.prev_grid),
            None => Vec::new(),
        }
    }

    /// Intended contract: validate the destination against the moving
    /// piece's generated moves, relocate the piece and refresh the grid.
    /// The commit step does not exist yet; the call always fails before
    /// mutating anything.
    pub fn move_piece(&mut self, mv: Move) -> Result<(), EngineError> {
        if let Some(piece) = self.piece_at(mv.from) {
            let _candidates = piece.pseudo_moves(&self.grid(), &self.prev_grid);
        }
        Err(EngineError::Unsupported("move commitment"))
    }

    /// Two-character display codes, rank 8 first. Empty squares render as
    /// two spaces, occupied squares as side letter plus kind letter.
    pub fn render_text(&self) -> [[String; 8]; 8] {
        let mut rows: [[String; 8]; 8] =
            std::array::from_fn(|_| std::array::from_fn(|_| "  ".to_string()));

        for piece in &self.pieces {
            let display_row = (7 - piece.square.row) as usize;
            rows[display_row][piece.square.col as usize] =
                format!("{}{}", piece.side.letter(), piece.kind.letter());
        }

        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render_text() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

fn piece_from_symbol(ch: char) -> Result<(Side, PieceKind), EngineError> {
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(EngineError::UnknownSymbol(ch)),
    };
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    Ok((side, kind))
}

// Helper function (outside the impl block)
pub fn square_to_algebraic(square: Square) -> String {
    let file = (b'a' + square.col as u8) as char;
    let rank = (b'1' + square.row as u8) as char;
    format!("{}{}", file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_standard_setup_has_32_pieces() {
        let board = Board::new();
        assert_eq!(board.pieces.len(), 32);

        let white = board.pieces.iter().filter(|p| p.side == Side::White).count();
        assert_eq!(white, 16, "each side gets 16 pieces");
    }

    #[test]
    fn test_standard_setup_one_piece_per_square() {
        let board = Board::new();
        let grid = board.grid();

        let occupied: usize = grid
            .iter()
            .flatten()
            .filter(|square| square.is_some())
            .count();
        assert_eq!(occupied, 32, "no two pieces may share a square");
    }

    #[test]
    fn test_grid_indexes_pieces_by_square() {
        let board = Board::new();
        let grid = board.grid();

        for piece in &board.pieces {
            let indexed = grid[piece.square.row as usize][piece.square.col as usize];
            assert_eq!(indexed, Some(*piece));
        }
    }

    #[test]
    fn test_placement_round_trip_matches_standard_setup() {
        let parsed = Board::from_placement(STANDARD_PLACEMENT).unwrap();
        let standard = Board::new();

        let parsed_grid = parsed.grid();
        let standard_grid = standard.grid();

        for row in 0..8 {
            for col in 0..8 {
                let a = parsed_grid[row][col].map(|p| (p.side, p.kind));
                let b = standard_grid[row][col].map(|p| (p.side, p.kind));
                assert_eq!(a, b, "mismatch at row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_placement_with_unknown_symbol_fails() {
        let result = Board::from_placement("8/8/8/8/8/8/8/PPPPPPPX");
        assert_eq!(result.unwrap_err(), EngineError::UnknownSymbol('X'));
    }

    #[test]
    fn test_placement_with_wrong_rank_count_fails() {
        let result = Board::from_placement("8/8/8/8");
        assert!(matches!(result, Err(EngineError::BadPlacement(_))));
    }

    #[test]
    fn test_placement_with_overfull_rank_fails() {
        let result = Board::from_placement("8/8/8/8/8/8/8/PPPPPPPPP");
        assert!(matches!(result, Err(EngineError::BadPlacement(_))));
    }

    #[test]
    fn test_placement_ignores_trailing_fen_fields() {
        let board = Board::from_placement("8/4B3/6N1/8/1B6/3n4/8/8 w KQkq ").unwrap();
        assert_eq!(board.pieces.len(), 4);

        let expect = [
            (Square::new(6, 4), Side::White, PieceKind::Bishop),
            (Square::new(5, 6), Side::White, PieceKind::Knight),
            (Square::new(3, 1), Side::White, PieceKind::Bishop),
            (Square::new(2, 3), Side::Black, PieceKind::Knight),
        ];
        for (square, side, kind) in expect {
            let piece = board.piece_at(square).expect("piece missing");
            assert_eq!((piece.side, piece.kind), (side, kind));
        }
    }

    #[test]
    fn test_placement_row_mapping() {
        // The first rank of the string is the far side from White: row 7.
        let board = Board::from_placement("r7/8/8/8/8/8/8/7R").unwrap();

        let black_rook = board.piece_at(Square::new(7, 0)).unwrap();
        assert_eq!((black_rook.side, black_rook.kind), (Side::Black, PieceKind::Rook));

        let white_rook = board.piece_at(Square::new(0, 7)).unwrap();
        assert_eq!((white_rook.side, white_rook.kind), (Side::White, PieceKind::Rook));
    }

    #[test]
    fn test_prev_grid_matches_construction_snapshot() {
        let board = Board::from_placement(STANDARD_PLACEMENT).unwrap();
        assert_eq!(board.prev_grid(), &board.grid());
    }

    #[test]
    fn test_move_piece_is_unsupported_and_mutates_nothing() {
        let mut board = Board::new();
        let before = board.grid();

        let mv = Move::new(Square::new(1, 4), Square::new(3, 4));
        assert_eq!(
            board.move_piece(mv),
            Err(EngineError::Unsupported("move commitment"))
        );
        assert_eq!(board.grid(), before, "a failed move must leave the board intact");
        assert_eq!(board.prev_grid(), &before);

        // Also fails for a vacant source square.
        let mv = Move::new(Square::new(4, 4), Square::new(5, 4));
        assert!(board.move_piece(mv).is_err());
    }

    #[test]
    fn test_moves_from_vacant_square_is_empty() {
        let board = Board::new();
        assert!(board.moves_from(Square::new(4, 4)).is_empty());
    }

    #[test]
    fn test_moves_from_uses_the_current_grid() {
        let board = Board::new();

        let knight_moves = board.moves_from(Square::new(0, 1));
        assert_eq!(knight_moves.len(), 2);

        let pawn_moves = board.moves_from(Square::new(1, 0));
        assert_eq!(pawn_moves, vec![Square::new(2, 0), Square::new(3, 0)]);

        // Sliders are boxed in at the start.
        assert!(board.moves_from(Square::new(0, 0)).is_empty());
        assert!(board.moves_from(Square::new(0, 3)).is_empty());
    }

    #[test]
    fn test_render_text_codes_and_orientation() {
        let board = Board::new();
        let rows = board.render_text();

        // Rank 8 is printed first.
        assert_eq!(rows[0][0], "BR");
        assert_eq!(rows[0][4], "BK");
        assert_eq!(rows[1][3], "BP");
        assert_eq!(rows[4][4], "  ");
        assert_eq!(rows[6][0], "WP");
        assert_eq!(rows[7][3], "WQ");
        assert_eq!(rows[7][4], "WK");
    }

    #[test]
    fn test_display_renders_eight_lines() {
        let board = Board::new();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().next().unwrap().starts_with("BR BN BB"));
    }

    #[test]
    fn test_square_to_algebraic() {
        assert_eq!(square_to_algebraic(Square::new(0, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(3, 4)), "e4");
        assert_eq!(square_to_algebraic(Square::new(7, 7)), "h8");
    }
}
