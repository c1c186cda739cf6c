//! Desktop entry point.

use eframe::egui;

use pendlab::app::PendulumApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("starting double pendulum laboratory");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Double Pendulum Simulation"),
        // Use the wgpu renderer for custom painting in the viewport
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "pendlab",
        options,
        Box::new(|cc| Ok(Box::new(PendulumApp::new(cc)))),
    )
}
