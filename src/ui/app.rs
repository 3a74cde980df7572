//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use super::toast::{Toast, ToastKind};
use crate::game::{Command, GameController, TurnState};
use crate::{GameError, MoveError, Player, SearchType};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: GameController,
    board_view: BoardView,
    toast: Option<Toast>,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            game: GameController::new(),
            board_view: BoardView::default(),
            toast: None,
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Forward a command; rejected moves become a toast
    fn dispatch(&mut self, command: Command) {
        if let Err(err) = self.game.execute(command) {
            debug!(?command, %err, "command rejected");
            let duration = self.game.config().toast_duration;
            let message = match err {
                GameError::InvalidMove(MoveError::Occupied(_)) => {
                    "Invalid move! This square is already taken.".to_string()
                }
                GameError::InvalidMove(reason) => format!("Invalid move! {reason}."),
                GameError::InvalidNavigation(reason) => reason.to_string(),
            };
            self.toast = Some(Toast::error(message, duration));
        }
    }

    fn undo(&mut self) {
        if !self.game.can_undo() {
            let duration = self.game.config().toast_duration;
            self.toast = Some(Toast::new("Nothing to undo", ToastKind::Info, duration));
            return;
        }
        self.dispatch(Command::Undo);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.dispatch(Command::Reset);
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Player vs Computer");
                });
            });
        });
    }

    /// Render the side panel with status, controls and move history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(MARK_X));
            ui.label(RichText::new("O").size(22.0).strong().color(MARK_O));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Status line plus move number while the game is running
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (status, color) = match self.game.winner() {
                Some(Player::Human) => ("You Win! 🎉", WIN_HIGHLIGHT),
                Some(Player::Computer) => ("Computer Wins! 🤖", STATUS_WARNING),
                None if self.game.is_draw() => ("It's a Draw! 🤝", STATUS_WARNING),
                None if self.game.is_thinking() => ("Computer is thinking... 🤔", STATUS_WARNING),
                None if self.game.current_player() == Player::Human => ("Your Turn", STATUS_NORMAL),
                None => ("Computer's Turn", TEXT_SECONDARY),
            };
            ui.label(RichText::new(status).size(18.0).strong().color(color));

            if !self.game.is_game_over() {
                ui.add_space(4.0);
                let side = match self.game.current_player() {
                    Player::Human => "(You: X)",
                    Player::Computer => "(Computer: O)",
                };
                ui.label(
                    RichText::new(format!("Move #{} {}", self.game.move_count() + 1, side))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }

            if self.game.turn_state() == TurnState::Reviewing {
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Reviewing an earlier position")
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let new_game = egui::Button::new(RichText::new("🔄 New Game").color(TEXT_PRIMARY))
                    .fill(BUTTON_BG);
                if ui.add(new_game).clicked() {
                    self.dispatch(Command::Reset);
                }

                let undo = egui::Button::new(RichText::new("↶ Undo Move").color(TEXT_PRIMARY))
                    .fill(BUTTON_BG);
                if ui.add_enabled(self.game.can_undo(), undo).clicked() {
                    self.undo();
                }
            });
        });
    }

    /// Move list; every entry jumps to its position
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        if self.game.history().len() < 2 {
            return;
        }

        let mut jump = None;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVE HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                for (index, snapshot) in self.game.history().iter().enumerate() {
                    let is_current = index == self.game.cursor();
                    let text = format!("{}: {}", index, snapshot.describe());
                    let fill = if is_current { CURRENT_MOVE_BG } else { BUTTON_BG };
                    let button = egui::Button::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .fill(fill)
                        .min_size(egui::vec2(ui.available_width(), 0.0));
                    if ui.add(button).clicked() {
                        jump = Some(index);
                    }
                }
            });
        });

        if let Some(index) = jump {
            self.dispatch(Command::JumpTo(index));
        }
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("🔧 AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(remaining) = self.game.thinking_remaining(Instant::now()) {
                ui.label(
                    RichText::new(format!("Replying in {:.2}s", remaining.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_WARNING),
                );
            }

            match self.game.last_move_result() {
                Some(result) => {
                    let kind = match result.search_type {
                        SearchType::Opening => "Opening book",
                        SearchType::AlphaBeta => "Alpha-beta",
                    };
                    ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_NORMAL));
                    ui.label(
                        RichText::new(format!(
                            "Score: {}  {} nodes  {}ms",
                            result.score, result.nodes, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(30, 32, 36);

            let accepting_input = self.game.turn_state() == TurnState::HumanTurn
                && !self.game.is_thinking();
            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        self.game.board(),
                        self.game.current().last_move,
                        self.game.winning_line(),
                        accepting_input,
                    )
                })
                .inner;

            if let Some(idx) = clicked {
                self.dispatch(Command::Move(idx));
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, reset, toggle_debug) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::D),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.undo();
        }
        if reset {
            self.dispatch(Command::Reset);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Schedule or apply the computer's reply
        self.game.poll();

        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Instant::now()))
        {
            self.toast = None;
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(toast) = &self.toast {
            toast.show(ctx);
        }

        // Keep frames coming while a timer is running
        if self.game.is_thinking() || self.toast.is_some() {
            ctx.request_repaint();
        }
    }
}
