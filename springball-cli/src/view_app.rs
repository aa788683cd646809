//! Interactive 3D view of the bouncing ball
//!
//! Each frame advances the simulation by exactly one fixed step and copies
//! the new position into the ball's transform before drawing.

use crate::orbit::OrbitCamera;
use eframe::egui;
use glam::DVec3;
use springball_core::{frame_steps, height_to_gray, step_simulation, SimulationContext};

const BALL_RADIUS: f64 = 1.0;
const GRID_SIZE: f64 = 100.0;
const GRID_DIVISIONS: usize = 10;
const CAMERA_EYE: DVec3 = DVec3::new(-10.0, 10.0, 0.0);
const CAMERA_FOV_DEGREES: f64 = 75.0;

/// Viewer application
pub struct ViewApp {
    ctx: SimulationContext,
    /// Renderer-side copy of the ball position, refreshed after every step
    ball_position: DVec3,
    camera: OrbitCamera,
    playing: bool,
}

impl ViewApp {
    pub fn new(ctx: SimulationContext, _cc: &eframe::CreationContext<'_>) -> Self {
        let ball_position = ctx.state.position();
        Self {
            ctx,
            ball_position,
            camera: OrbitCamera::looking_at(CAMERA_EYE, DVec3::ZERO, CAMERA_FOV_DEGREES),
            playing: true,
        }
    }

    fn advance(&mut self) {
        self.ball_position = step_simulation(&mut self.ctx);
    }

    fn reset(&mut self) {
        self.ctx.reset();
        self.ball_position = self.ctx.state.position();
    }

    fn draw_scene(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;

        let drag = response.drag_delta();
        if drag != egui::Vec2::ZERO {
            self.camera.orbit(drag.x as f64, drag.y as f64);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll as f64);
            }
        }

        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(20));

        let projector = self
            .camera
            .projector(rect.width() as f64, rect.height() as f64);
        let center = rect.center();
        let to_screen = |(x, y): (f64, f64)| center + egui::vec2(x as f32, y as f32);

        // Reference grid on the y = 0 plane
        let half = GRID_SIZE / 2.0;
        let spacing = GRID_SIZE / GRID_DIVISIONS as f64;
        for i in 0..=GRID_DIVISIONS {
            let offset = -half + i as f64 * spacing;
            let color = if offset == 0.0 {
                egui::Color32::from_gray(140)
            } else {
                egui::Color32::from_gray(70)
            };
            let lines = [
                (DVec3::new(offset, 0.0, -half), DVec3::new(offset, 0.0, half)),
                (DVec3::new(-half, 0.0, offset), DVec3::new(half, 0.0, offset)),
            ];
            for (a, b) in lines {
                if let Some([sa, sb]) = projector.segment(a, b) {
                    painter.line_segment([to_screen(sa), to_screen(sb)], egui::Stroke::new(1.0, color));
                }
            }
        }

        // Ball
        if let (Some(pos), Some(radius)) = (
            projector.point(self.ball_position),
            projector.radius(self.ball_position, BALL_RADIUS),
        ) {
            let gray = height_to_gray(self.ball_position.y);
            let fill = egui::Color32::from_rgb(
                (gray.x * 255.0).round() as u8,
                (gray.y * 255.0).round() as u8,
                (gray.z * 255.0).round() as u8,
            );
            let screen_pos = to_screen(pos);
            let radius = radius as f32;
            painter.circle_filled(screen_pos, radius, fill);
            painter.circle_stroke(screen_pos, radius, egui::Stroke::new(1.5, egui::Color32::BLUE));
        }

    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut step_requested = false;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }

                if ui
                    .add_enabled(!self.playing, egui::Button::new("⏭ Step"))
                    .clicked()
                {
                    step_requested = true;
                }

                ui.separator();

                ui.label(format!(
                    "Step: {}  t = {:.1}  mode: {}  y = {:.3}  energy = {:.6}",
                    self.ctx.current_step,
                    self.ctx.sim_time(),
                    self.ctx.mode(),
                    self.ball_position.y,
                    self.ctx.energy()
                ));
            });
        });

        // At most one fixed step per frame, independent of the real frame interval
        for _ in 0..frame_steps(self.playing, step_requested) {
            self.advance();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_scene(ui));

        if self.playing {
            ctx.request_repaint();
        }
    }
}
