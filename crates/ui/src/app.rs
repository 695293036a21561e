use egui::{Color32, Rect, Sense, Vec2};
use engine::{square_to_algebraic, Board, GameLogger, Move, PieceKind, Side, Square};

pub struct ChessApp {
    board: Board,
    selected_square: Option<Square>,
    highlighted_moves: Vec<Square>,
    placement_input: String,
    status: String,
    logger: GameLogger,
}

impl ChessApp {
    pub fn new() -> Self {
        let mut logger = GameLogger::new();
        let board = Board::new();
        logger.log_board(&board);

        Self {
            board,
            selected_square: None,
            highlighted_moves: Vec::new(),
            placement_input: String::new(),
            status: String::new(),
            logger,
        }
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .min_width(220.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chess Board");

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - 20.0;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));

            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let relative_pos = pos - board_rect.min;
                    if let Some(clicked_square) =
                        Square::from_coords(relative_pos.x, relative_pos.y, square_size)
                    {
                        self.handle_square_click(clicked_square);
                    }
                }
            }

            self.draw_board(ui, board_rect, square_size);
        });
    }
}

impl ChessApp {
    fn handle_square_click(&mut self, clicked_square: Square) {
        if let Some(selected) = self.selected_square {
            if selected == clicked_square {
                // Deselect
                self.clear_selection();
            } else if self.highlighted_moves.contains(&clicked_square) {
                let mv = Move::new(selected, clicked_square);
                match self.board.move_piece(mv) {
                    Ok(()) => self.clear_selection(),
                    Err(err) => {
                        self.status = err.to_string();
                        self.logger.log_rejected_move(mv, &err.to_string());
                    }
                }
            } else if self.board.piece_at(clicked_square).is_some() {
                self.select_square(clicked_square);
            } else {
                // Click on empty square, deselect
                self.clear_selection();
            }
        } else if self.board.piece_at(clicked_square).is_some() {
            self.select_square(clicked_square);
        }
    }

    fn select_square(&mut self, square: Square) {
        self.selected_square = Some(square);
        self.highlighted_moves = self.board.moves_from(square);

        if let Some(piece) = self.board.piece_at(square) {
            self.logger.log_move_query(&piece, &self.highlighted_moves);
        }
        self.status = format!(
            "{} destinations from {}",
            self.highlighted_moves.len(),
            square_to_algebraic(square)
        );
    }

    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.highlighted_moves.clear();
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Position");

        if ui.button("Reset to starting position").clicked() {
            self.replace_board(Board::new());
            self.status = "Standard position loaded".to_string();
        }

        ui.separator();
        ui.label("FEN placement:");
        ui.text_edit_singleline(&mut self.placement_input);
        if ui.button("Load placement").clicked() {
            match Board::from_placement(&self.placement_input) {
                Ok(board) => {
                    self.replace_board(board);
                    self.status = "Placement loaded".to_string();
                }
                Err(err) => {
                    self.status = err.to_string();
                    self.logger.log(&format!("placement rejected: {}", err));
                }
            }
        }

        ui.separator();
        if ui.button("Save game log").clicked() {
            let path = format!(
                "game_log_{}.txt",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            self.status = match self.logger.save_to_file(&path) {
                Ok(()) => format!("Log saved to {}", path),
                Err(err) => format!("Could not save log: {}", err),
            };
        }

        ui.separator();
        if !self.status.is_empty() {
            ui.label(&self.status);
        }
    }

    fn replace_board(&mut self, board: Board) {
        self.logger.log_board(&board);
        self.board = board;
        self.clear_selection();
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();
        let grid = self.board.grid();

        for row in 0..8i8 {
            for col in 0..8i8 {
                let square = Square::new(row, col);
                let is_light = (row + col) % 2 == 1;

                let square_rect = Rect::from_min_size(
                    board_rect.min
                        + Vec2::new(col as f32 * square_size, (7 - row) as f32 * square_size),
                    Vec2::splat(square_size),
                );

                let base_color = if is_light {
                    Color32::from_rgb(240, 217, 181)
                } else {
                    Color32::from_rgb(181, 136, 99)
                };

                // Highlight selected square
                let square_color = if Some(square) == self.selected_square {
                    Color32::from_rgb(255, 255, 0)
                } else {
                    base_color
                };

                painter.rect_filled(square_rect, 0.0, square_color);

                // Destination indicators
                if self.highlighted_moves.contains(&square) {
                    let center = square_rect.center();

                    if self.board.piece_at(square).is_some() {
                        // Occupied destination (kings produce these) - draw donut
                        let outer_radius = square_size * 0.4;
                        let inner_radius = square_size * 0.25;
                        painter.circle_filled(
                            center,
                            outer_radius,
                            Color32::from_rgba_premultiplied(128, 128, 128, 179),
                        );
                        painter.circle_filled(center, inner_radius, square_color);
                    } else {
                        // Empty destination - draw dot
                        let radius = square_size * 0.15;
                        painter.circle_filled(
                            center,
                            radius,
                            Color32::from_rgba_premultiplied(128, 128, 128, 179),
                        );
                    }
                }

                if let Some(piece) = grid[row as usize][col as usize] {
                    draw_piece(painter, piece.kind, piece.side, square_rect);
                }
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }
}

fn draw_piece(painter: &egui::Painter, kind: PieceKind, side: Side, square_rect: Rect) {
    let center = square_rect.center();
    let size = square_rect.size() * 0.8;

    let piece_char = match (kind, side) {
        (PieceKind::King, Side::White) => "♔",
        (PieceKind::Queen, Side::White) => "♕",
        (PieceKind::Rook, Side::White) => "♖",
        (PieceKind::Bishop, Side::White) => "♗",
        (PieceKind::Knight, Side::White) => "♘",
        (PieceKind::Pawn, Side::White) => "♙",
        (PieceKind::King, Side::Black) => "♚",
        (PieceKind::Queen, Side::Black) => "♛",
        (PieceKind::Rook, Side::Black) => "♜",
        (PieceKind::Bishop, Side::Black) => "♝",
        (PieceKind::Knight, Side::Black) => "♞",
        (PieceKind::Pawn, Side::Black) => "♟",
    };

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        piece_char,
        egui::FontId::proportional(size.x),
        Color32::BLACK,
    );
}
