mod app;

use app::ChessApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_title("Chess Board"),
        ..Default::default()
    };

    eframe::run_native(
        "Chess Board",
        options,
        Box::new(|_cc| Ok(Box::new(ChessApp::new()))),
    )
}
