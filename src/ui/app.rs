//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::theme::*;
use crate::{AppConfig, GameEngine, RoundStatus, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    game: GameEngine,
    board_view: BoardView,
    /// Last rejection, cleared on the next accepted action
    message: Option<String>,
    /// Winner dialog is open
    show_winner: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(&config)
    }

    fn with_config(config: &AppConfig) -> Self {
        Self {
            game: GameEngine::new(),
            board_view: BoardView::new(config),
            message: None,
            show_winner: false,
        }
    }

    fn place(&mut self, pos: crate::Pos) {
        match self.game.play(pos) {
            Ok(_) => {
                self.message = None;
                self.show_winner = self.game.is_over();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn undo(&mut self) {
        match self.game.undo_move() {
            Ok(_) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn restart(&mut self) {
        self.game.reset_round();
        self.message = None;
        self.show_winner = false;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart Round (R)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("New Session").clicked() {
                        log::info!("new session, scores cleared");
                        self.game = GameEngine::new();
                        self.message = None;
                        self.show_winner = false;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let score = self.game.scoreboard();
                    ui.label(format!("Black {} : {} White", score.black(), score.white()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_rules_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(ACCENT));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Turn indicator: whose move it is, or who won
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CURRENT PLAYER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let player = self.game.winner().unwrap_or(self.game.turn());
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                let (fill, rim) = match player {
                    Stone::White => (WHITE_STONE, WHITE_STONE_SHADOW),
                    _ => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
                };
                ui.painter().circle_filled(rect.center(), 17.0, fill);
                ui.painter().circle_stroke(rect.center(), 17.0, egui::Stroke::new(1.5, rim));

                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = match self.game.status() {
                        RoundStatus::Won(_) => RichText::new("Wins the round").color(WIN_HIGHLIGHT),
                        RoundStatus::InProgress if self.game.is_stalemate() => {
                            RichText::new("Board full, no winner").color(TEXT_SECONDARY)
                        }
                        RoundStatus::InProgress => RichText::new("To move").color(TEXT_SECONDARY),
                    };
                    ui.label(status.size(12.0));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let restart = egui::Button::new(RichText::new("⟲ Restart").size(15.0).strong().color(TEXT_PRIMARY))
                .fill(ACCENT)
                .min_size(Vec2::new(ui.available_width(), 34.0));
            if ui.add(restart).clicked() {
                self.restart();
            }

            ui.add_space(6.0);

            let undo = egui::Button::new(RichText::new("↩ Undo").size(15.0).color(TEXT_PRIMARY))
                .fill(BUTTON_BG)
                .min_size(Vec2::new(ui.available_width(), 34.0));
            if ui.add_enabled(!self.game.is_over(), undo).clicked() {
                self.undo();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Wins per color across rounds
    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.game.scoreboard();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (symbol, label, wins) in [("●", "Black wins", score.black()), ("○", "White wins", score.white())] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(16.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(label).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(wins.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Rounds played: {}", score.rounds_played()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_rules_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RULES").size(10.0).color(ACCENT));
            ui.add_space(4.0);
            for line in [
                "• Black moves first, then White",
                "• Five in a row wins: across, down or diagonal",
                "• Click an intersection to place a stone",
            ] {
                ui.label(RichText::new(line).size(12.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let frame = BoardFrame {
                    board: self.game.board(),
                    turn: self.game.turn(),
                    last_move: self.game.last_move().map(|m| m.pos),
                    winning_line: self.game.winning_line(),
                    accepting_input: !self.game.is_over() && !self.show_winner,
                };

                if let Some(pos) = self.board_view.show(ui, frame) {
                    self.place(pos);
                }
            });
    }

    /// Modal announcing the winner. Closing it starts the next round.
    fn render_winner_dialog(&mut self, ctx: &Context) {
        let Some(winner) = self.game.winner() else {
            return;
        };
        if !self.show_winner {
            return;
        }

        let mut open = true;
        let mut play_again = false;
        egui::Window::new("Round over")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .frame(Frame::window(&ctx.style()).fill(CARD_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Congratulations!").size(26.0).strong().color(ACCENT));
                    ui.add_space(8.0);
                    let symbol = if winner == Stone::Black { "●" } else { "○" };
                    ui.label(
                        RichText::new(format!("{} {} wins!", symbol, winner.name()))
                            .size(20.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(16.0);
                    let button = egui::Button::new(RichText::new("Play again").size(16.0).strong().color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .min_size(Vec2::new(160.0, 36.0));
                    if ui.add(button).clicked() {
                        play_again = true;
                    }
                    ui.add_space(8.0);
                });
            });

        if play_again || !open {
            self.restart();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R) || i.key_pressed(egui::Key::N),
            )
        });

        if undo {
            self.undo();
        }
        if restart {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_winner_dialog(ctx);
    }
}
