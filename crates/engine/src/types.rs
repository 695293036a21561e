use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn from_coords(x: f32, y: f32, square_size: f32) -> Option<Self> {
        let col = (x / square_size) as i8;
        let row = 7 - (y / square_size) as i8; // Flip row for screen coordinates

        let square = Self::new(row, col);
        if square.in_bounds() {
            Some(square)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Rank direction of a pawn advance: White toward higher rows.
    pub fn forward(&self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Pawn,
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Knight,
    ];

    /// Material value in pawns.
    pub fn material_value(&self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "pawn" => Ok(PieceKind::Pawn),
            "rook" => Ok(PieceKind::Rook),
            "knight" => Ok(PieceKind::Knight),
            "bishop" => Ok(PieceKind::Bishop),
            "queen" => Ok(PieceKind::Queen),
            "king" => Ok(PieceKind::King),
            _ => Err(EngineError::UnknownPieceName(name.to_string())),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown piece symbol '{0}' in placement")]
    UnknownSymbol(char),

    #[error("bad placement: {0}")]
    BadPlacement(String),

    #[error("invalid piece name \"{0}\"")]
    UnknownPieceName(String),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
