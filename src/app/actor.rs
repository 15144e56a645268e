//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the store and processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    if let Some(cmd) = self.state.handle_response(response) {
                        self.send(cmd);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: NetworkCommand) {
        if self.network_tx.send(cmd).is_err() {
            tracing::error!("Network actor is gone; command dropped");
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let cmd = match event {
            // Navigation
            UiEvent::NavigateIndex(index) => self.state.navigate_index(index),
            UiEvent::OpenPathInput => {
                self.state.open_path_input();
                None
            }
            UiEvent::PathChar(c) => {
                self.state.path_char(c);
                None
            }
            UiEvent::PathBackspace => {
                self.state.path_backspace();
                None
            }
            UiEvent::SubmitPath => self.state.submit_path(),
            UiEvent::CancelPathInput => {
                self.state.cancel_path_input();
                None
            }
            UiEvent::Reload => self.state.reload(),

            // Shell
            UiEvent::ToggleTheme => {
                self.state.toggle_theme();
                None
            }
            UiEvent::ToggleSidebar => {
                self.state.toggle_sidebar();
                None
            }

            // Login
            UiEvent::OpenLogin => {
                self.state.open_login();
                None
            }
            UiEvent::CloseLogin => {
                self.state.close_login();
                None
            }
            UiEvent::LoginChar(c) => {
                self.state.login_char(c);
                None
            }
            UiEvent::LoginBackspace => {
                self.state.login_backspace();
                None
            }
            UiEvent::LoginNextField => {
                self.state.login_next_field();
                None
            }
            UiEvent::SubmitLogin => self.state.submit_login(),
            UiEvent::Logout => {
                self.state.logout();
                None
            }

            // Profile
            UiEvent::EditProfile => {
                self.state.edit_profile();
                None
            }
            UiEvent::CancelEdit => {
                self.state.cancel_edit();
                None
            }
            UiEvent::SaveProfile => self.state.save_profile(),
            UiEvent::NextField => {
                self.state.next_field();
                None
            }
            UiEvent::PrevField => {
                self.state.prev_field();
                None
            }
            UiEvent::SelectNext => {
                self.state.select_next();
                None
            }
            UiEvent::SelectPrev => {
                self.state.select_prev();
                None
            }

            // Input editing
            UiEvent::StartEditing => {
                self.state.start_editing();
                None
            }
            UiEvent::StopEditing => {
                self.state.stop_editing();
                None
            }
            UiEvent::CharInput(c) => {
                self.state.enter_char(c);
                None
            }
            UiEvent::Backspace => {
                self.state.delete_char();
                None
            }
            UiEvent::CursorLeft => {
                self.state.move_cursor_left();
                None
            }
            UiEvent::CursorRight => {
                self.state.move_cursor_right();
                None
            }

            // Popups
            UiEvent::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            UiEvent::CloseHelp => {
                self.state.close_help();
                None
            }

            // System
            UiEvent::Quit => return true,
        };

        if let Some(cmd) = cmd {
            self.send(cmd);
        }
        false
    }
}
