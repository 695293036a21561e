use crate::board::{square_to_algebraic, Board};
use crate::piece::Piece;
use crate::types::{Move, Square};
use std::fs;

/// Append-only text log of board activity. The buffer is kept in memory and
/// written out on demand.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    query_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            query_count: 0,
        };

        logger.log("=== Chess Board Log Started ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_move_query(&mut self, piece: &Piece, destinations: &[Square]) {
        self.query_count += 1;
        self.log(&format!(
            "{}. {:?} {:?} on {}: {} destinations",
            self.query_count,
            piece.side,
            piece.kind,
            square_to_algebraic(piece.square),
            destinations.len()
        ));
    }

    pub fn log_rejected_move(&mut self, mv: Move, reason: &str) {
        self.log(&format!(
            "rejected {}-{}: {}",
            square_to_algebraic(mv.from),
            square_to_algebraic(mv.to),
            reason
        ));
    }

    /// Append the rendered text grid, rank 8 first.
    pub fn log_board(&mut self, board: &Board) {
        for row in board.render_text() {
            let line = row.join(" ");
            self.log(&line);
        }
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        fs::write(path, &self.log_buffer)
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
