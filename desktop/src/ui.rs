use eframe::egui;
use snake_engine::game::{Cell, Direction};
use snake_engine::session::{GameSnapshot, SessionSummary};
use tokio::sync::mpsc;

use crate::input::KEY_BINDINGS;
use crate::state::{AppState, RunnerCommand, SharedState};

const CHECKER_EVEN: egui::Color32 = egui::Color32::from_rgb(0x90, 0xee, 0x90);
const CHECKER_ODD: egui::Color32 = egui::Color32::from_rgb(0x98, 0xfb, 0x98);
const SNAKE_FILL: egui::Color32 = egui::Color32::from_rgb(0xad, 0xd8, 0xe6);
const SNAKE_BORDER: egui::Color32 = egui::Color32::BLACK;
const FOOD_COLOR: egui::Color32 = egui::Color32::RED;
const GAME_OVER_TEXT: &str = "GAME OVER!";

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<RunnerCommand>,
    last_input_direction: Option<Direction>,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<RunnerCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            last_input_direction: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let mut new_direction = None;

            for (key, direction) in KEY_BINDINGS {
                if i.key_pressed(*key) {
                    new_direction = Some(*direction);
                    break;
                }
            }

            if let Some(direction) = new_direction
                && Some(direction) != self.last_input_direction
            {
                let _ = self.command_tx.send(RunnerCommand::Turn(direction));
                self.last_input_direction = Some(direction);
            }
        });
    }

    fn render_score_bar(&mut self, ui: &mut egui::Ui, score: Option<u32>) {
        ui.horizontal(|ui| {
            ui.label(format!("Score: {}", score.unwrap_or(0)));
            ui.separator();
            ui.label(format!("High score: {}", self.shared_state.get_high_score()));
            ui.separator();
            if ui.button("New Game").clicked() {
                self.last_input_direction = None;
                let _ = self.command_tx.send(RunnerCommand::Restart);
            }
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot, game_over: bool) {
        let board = snapshot.board;
        let unit = board.unit as f32;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(board.width as f32, board.height as f32),
            egui::Sense::hover(),
        );
        let origin = response.rect.min;

        for col in 0..board.columns() {
            for row in 0..board.rows() {
                let color = if (col + row) % 2 == 0 {
                    CHECKER_EVEN
                } else {
                    CHECKER_ODD
                };
                let cell = Cell::new(col * board.unit, row * board.unit);
                painter.rect_filled(cell_rect(origin, &cell, unit), 0.0, color);
            }
        }

        painter.rect_filled(cell_rect(origin, &snapshot.food, unit), 0.0, FOOD_COLOR);

        for cell in &snapshot.body {
            let rect = cell_rect(origin, cell, unit);
            painter.rect_filled(rect, 0.0, SNAKE_FILL);
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, SNAKE_BORDER),
                egui::StrokeKind::Inside,
            );
        }

        if game_over {
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                GAME_OVER_TEXT,
                egui::FontId::proportional(50.0),
                egui::Color32::BLACK,
            );
        }
    }

    fn render_summary(&self, ui: &mut egui::Ui, summary: &SessionSummary) {
        ui.label(format!(
            "Final score {} after {} ticks ({})",
            summary.score,
            summary.ticks,
            summary.end_reason.label()
        ));
        if summary.high_score_beaten {
            ui.label("New high score!");
        }
    }

    fn render_recent_results(&self, ui: &mut egui::Ui) {
        let results = self.shared_state.recent_results();
        if results.is_empty() {
            return;
        }

        ui.separator();
        ui.label("Recent games:");
        for summary in results {
            ui.label(format!(
                "score {}, {}, {} ticks",
                summary.score,
                summary.end_reason.label(),
                summary.ticks
            ));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.shared_state.get_state() {
                AppState::InGame { snapshot } => {
                    self.render_score_bar(ui, snapshot.as_ref().map(|s| s.score));
                    ui.separator();
                    match snapshot {
                        Some(snapshot) => self.render_board(ui, &snapshot, false),
                        None => {
                            ui.spinner();
                        }
                    }
                }
                AppState::GameOver { snapshot, summary } => {
                    self.render_score_bar(ui, Some(summary.score));
                    ui.separator();
                    if let Some(snapshot) = snapshot {
                        self.render_board(ui, &snapshot, true);
                    }
                    self.render_summary(ui, &summary);
                }
            }

            self.render_recent_results(ui);
        });

        ctx.request_repaint();
    }
}

fn cell_rect(origin: egui::Pos2, cell: &Cell, unit: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + cell.x as f32, origin.y + cell.y as f32),
        egui::vec2(unit, unit),
    )
}
