use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use eframe::{App, Frame};
use egui::{Key, Mesh, Rect, Sense, Shape, ViewportCommand};
use plasma_core::{DiamondSquare, Grid, PlasmaConfig, PlasmaError, RngSampler, Sampler};
use plasma_storage::{save_pgm, save_png};

use crate::points::build_point_mesh;

pub struct PlasmaApp {
    engine: DiamondSquare,
    sampler: Box<dyn Sampler>,
    grid: Grid,

    // raster written after every generation
    output: PathBuf,
    point_size: f32,

    // point cloud cached for the viewport it was built for
    mesh: Option<(Rect, Arc<Mesh>)>,

    // timing & status
    generation: u64,
    last_duration: Option<f64>,
    status_message: String,
}

impl PlasmaApp {
    // Builds the app and runs the first generation
    pub fn new(config: &PlasmaConfig, output: PathBuf, point_size: f32) -> Result<Self, PlasmaError> {
        config.validate()?;
        let sampler: Box<dyn Sampler> = match config.seed {
            Some(seed) => Box::new(RngSampler::seeded(seed)),
            None => Box::new(RngSampler::thread()),
        };
        let mut app = Self {
            engine: DiamondSquare::from_config(config),
            sampler,
            grid: Grid::new(config.size)?,
            output,
            point_size,
            mesh: None,
            generation: 0,
            last_duration: None,
            status_message: String::new(),
        };
        app.regenerate();
        Ok(app)
    }

    // Whole pipeline again (range reset included), then persist
    pub fn regenerate(&mut self) {
        let start = Instant::now();
        self.engine.generate(&mut self.grid, self.sampler.as_mut());
        self.mesh = None;
        self.generation += 1;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        self.last_duration = Some(elapsed);

        self.status_message = match save_pgm(&self.output, &self.grid) {
            Ok(bytes) => format!(
                "#{} generated in {elapsed:.2} ms, saved {} ({bytes} bytes)",
                self.generation,
                self.output.display()
            ),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.output.display(), "raster save failed");
                format!("#{} generated, save failed: {e}", self.generation)
            }
        };
    }

    // Shared handle to the point cloud for `viewport`; rebuilt only when stale
    fn point_mesh(&mut self, viewport: Rect) -> Arc<Mesh> {
        match &self.mesh {
            Some((rect, mesh)) if *rect == viewport => Arc::clone(mesh),
            _ => {
                let mesh = Arc::new(build_point_mesh(&self.grid, viewport, self.point_size));
                self.mesh = Some((viewport, Arc::clone(&mesh)));
                mesh
            }
        }
    }

    fn export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("plasma.png")
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };
        self.status_message = match save_png(&path, &self.grid) {
            Ok(()) => format!("Exported {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        };
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (space, escape) = ctx.input(|i| (i.key_pressed(Key::Space), i.key_pressed(Key::Escape)));
        if escape {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if space {
            self.regenerate();
            ctx.request_repaint();
        }
    }
}

impl App for PlasmaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_keys(ctx);

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Plasma Fractal");
            ui.separator();

            let size = self.grid.size();
            ui.label(format!("Grid: {size}×{size}"));
            ui.label(format!("Initial range: {}", self.engine.initial_range()));

            ui.label("Point size");
            if ui
                .add(egui::Slider::new(&mut self.point_size, 1.0..=8.0))
                .changed()
            {
                self.mesh = None;
            }

            ui.separator();

            if ui.button("Regenerate (Space)").clicked() {
                self.regenerate();
            }
            if ui.button("Export PNG…").clicked() {
                self.export_png();
            }

            ui.separator();
            let (min, max) = self.grid.min_max();
            ui.label(format!("min {min}  max {max}  mean {:.1}", self.grid.mean()));
            if let Some(ms) = self.last_duration {
                ui.label(format!("Last generation: {ms:.2} ms"));
            }
            ui.label(&self.status_message);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let mesh = self.point_mesh(response.rect);
                painter.add(Shape::mesh(mesh));
            });
    }
}
