//! The eframe window itself: a viewport filled with one color.

use super::{READY, SwatchRequest};
use crate::error::Error;
use eframe::egui;
use std::io::{self, Write};

struct SwatchApp {
    fill: egui::Color32,
}

impl eframe::App for SwatchApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.fill))
            .show_inside(ui, |_ui| {});
    }
}

/// Blocks until the window is closed. Must run on the process's main thread.
///
/// Writes [`READY`] to stdout once the viewport and its GL context exist.
///
/// # Errors
/// [`Error::Gui`] when no window can be created (no display, missing GL).
#[allow(clippy::cast_precision_loss)]
pub fn show(request: &SwatchRequest) -> Result<(), Error> {
    let geometry = request.geometry;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(request.title.clone())
        .with_app_id("tintpick")
        .with_inner_size([geometry.width as f32, geometry.height as f32]);
    if let Some((x, y)) = geometry.position {
        viewport = viewport.with_position([x as f32, y as f32]);
    }

    let options = eframe::NativeOptions {
        viewport,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    let app = SwatchApp {
        fill: egui::Color32::from_rgb(request.color.r, request.color.g, request.color.b),
    };
    eframe::run_native(
        &request.title,
        options,
        Box::new(move |_cc| {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{READY}")?;
            stdout.flush()?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}
