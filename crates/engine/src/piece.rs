use crate::types::{EngineError, PieceKind, Side, Square};

/// The derived 8x8 index from square to occupying piece.
/// Indexed as `grid[row][col]`, row 0 nearest White's side.
pub type Grid = [[Option<Piece>; 8]; 8];

const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub value: i32,
    pub square: Square,
    pub first_move: bool,
}

impl Piece {
    /// `value` is derived from the kind here and never re-derived afterwards.
    pub fn new(side: Side, kind: PieceKind, square: Square) -> Self {
        Self {
            side,
            kind,
            value: kind.material_value(),
            square,
            first_move: true,
        }
    }

    /// Fixed opening squares for a kind/side under the standard setup.
    pub fn starting_squares(kind: PieceKind, side: Side) -> Vec<Square> {
        let (back_row, pawn_row) = match side {
            Side::White => (0, 1),
            Side::Black => (7, 6),
        };

        match kind {
            PieceKind::Pawn => (0..8).map(|col| Square::new(pawn_row, col)).collect(),
            PieceKind::Rook => vec![Square::new(back_row, 0), Square::new(back_row, 7)],
            PieceKind::Knight => vec![Square::new(back_row, 1), Square::new(back_row, 6)],
            PieceKind::Bishop => vec![Square::new(back_row, 2), Square::new(back_row, 5)],
            PieceKind::Queen => vec![Square::new(back_row, 3)],
            PieceKind::King => vec![Square::new(back_row, 4)],
        }
    }

    /// Enumerate the squares this piece could move to, ignoring whether the
    /// resulting position leaves its own king exposed. Only empty destination
    /// squares are produced; squares holding a capturable piece are not.
    pub fn pseudo_moves(&self, grid: &Grid, _prev_grid: &Grid) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(grid),
            PieceKind::Rook => self.ray_moves(grid, &ORTHOGONAL_DIRS),
            PieceKind::Bishop => self.ray_moves(grid, &DIAGONAL_DIRS),
            PieceKind::Queen => {
                let mut moves = self.ray_moves(grid, &ORTHOGONAL_DIRS);
                moves.extend(self.ray_moves(grid, &DIAGONAL_DIRS));
                moves
            }
            PieceKind::Knight => self.knight_moves(grid),
            PieceKind::King => self.king_moves(),
        }
    }

    /// Capture generation is not part of this engine.
    pub fn pseudo_captures(
        &self,
        _grid: &Grid,
        _prev_grid: &Grid,
    ) -> Result<Vec<Square>, EngineError> {
        Err(EngineError::Unsupported("capture generation"))
    }

    fn pawn_moves(&self, grid: &Grid) -> Vec<Square> {
        let mut moves = Vec::new();
        let Square { row, col } = self.square;
        let dir = self.side.forward();
        let (start_row, last_row) = match self.side {
            Side::White => (1, 7),
            Side::Black => (6, 0),
        };

        // Single step, only onto an empty square.
        if row != last_row && empty_at(grid, row + dir, col) {
            moves.push(Square::new(row + dir, col));
        }

        // Double step from the starting rank. Only the landing square is
        // checked for emptiness; the intermediate square is not consulted.
        if row == start_row && empty_at(grid, row + 2 * dir, col) {
            moves.push(Square::new(row + 2 * dir, col));
        }

        moves
    }

    /// Walk outward in each direction, appending empty squares until the
    /// board edge or the first occupied square. The occupied square itself is
    /// never appended.
    fn ray_moves(&self, grid: &Grid, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(dr, dc) in directions {
            let mut row = self.square.row + dr;
            let mut col = self.square.col + dc;

            while (0..8).contains(&row) && (0..8).contains(&col) {
                if !empty_at(grid, row, col) {
                    break;
                }
                moves.push(Square::new(row, col));
                row += dr;
                col += dc;
            }
        }

        moves
    }

    fn knight_moves(&self, grid: &Grid) -> Vec<Square> {
        let mut moves = Vec::new();

        for dr in -2i8..=2 {
            for dc in -2i8..=2 {
                if dr.abs() + dc.abs() != 3 {
                    continue;
                }
                let row = self.square.row + dr;
                let col = self.square.col + dc;
                if (0..8).contains(&row) && (0..8).contains(&col) && empty_at(grid, row, col) {
                    moves.push(Square::new(row, col));
                }
            }
        }

        moves
    }

    // Adjacent squares are produced regardless of what occupies them.
    fn king_moves(&self) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(dr, dc) in KING_OFFSETS.iter() {
            let square = Square::new(self.square.row + dr, self.square.col + dc);
            if square.in_bounds() {
                moves.push(square);
            }
        }

        moves
    }
}

fn empty_at(grid: &Grid, row: i8, col: i8) -> bool {
    grid[row as usize][col as usize].is_none()
}
