use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::controller::{CopiedField, WalletController, GENERATE_MIN_DELAY};
use crate::faucets::FAUCETS;
use crate::tui::event::AppEvent;
use crate::wallet::WalletData;

/// Main application state
pub struct App {
    pub controller: WalletController,
    pub selected_faucet: usize,
    pub spinner_frame: usize,
    pub status_message: Option<(String, bool)>, // (message, is_error)
    tx: Option<mpsc::UnboundedSender<AppEvent>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            controller: WalletController::new(),
            selected_faucet: 0,
            spinner_frame: 0,
            status_message: None,
            tx: None,
        }
    }

    pub fn set_sender(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        self.tx = Some(tx);
    }

    /// Handles one event. Returns false when the app should exit.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                self.on_tick();
                true
            }
            AppEvent::WalletGenerated(wallet) => {
                self.controller.finish_generate(wallet);
                self.status_message = Some(("New wallet generated".to_string(), false));
                true
            }
            AppEvent::Quit => false,
        }
    }

    fn on_tick(&mut self) {
        self.controller.tick(Instant::now());
        if self.controller.is_generating() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('g') => self.generate_wallet(),
            KeyCode::Char('a') => self.copy_address(),
            KeyCode::Char('p') => self.copy_private_key(),
            KeyCode::Char('v') => {
                self.controller.toggle_visibility();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_faucet > 0 {
                    self.selected_faucet -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_faucet < FAUCETS.len() - 1 {
                    self.selected_faucet += 1;
                }
            }
            KeyCode::Char('c') => self.copy_faucet_url(),
            _ => {}
        }
        true
    }

    fn generate_wallet(&mut self) {
        if !self.controller.begin_generate() {
            return;
        }
        self.status_message = None;

        if let Some(tx) = &self.tx {
            let tx = tx.clone();
            tokio::spawn(async move {
                // Hold the spinner up long enough to register as feedback.
                tokio::time::sleep(GENERATE_MIN_DELAY).await;
                let _ = tx.send(AppEvent::WalletGenerated(WalletData::generate()));
            });
        }
    }

    fn copy_address(&mut self) {
        let Some(wallet) = self.controller.wallet() else {
            self.status_message = Some(("No wallet yet — press g to generate".to_string(), true));
            return;
        };
        let text = wallet.address.clone();
        if self.write_clipboard(text) {
            self.controller.mark_copied(CopiedField::Address, Instant::now());
            self.status_message = Some(("Address copied to clipboard".to_string(), false));
        }
    }

    fn copy_private_key(&mut self) {
        let Some(wallet) = self.controller.wallet() else {
            self.status_message = Some(("No wallet yet — press g to generate".to_string(), true));
            return;
        };
        let text = wallet.private_key.clone();
        if self.write_clipboard(text) {
            self.controller
                .mark_copied(CopiedField::PrivateKey, Instant::now());
            self.status_message = Some(("Private key copied to clipboard".to_string(), false));
        }
    }

    fn copy_faucet_url(&mut self) {
        let faucet = FAUCETS[self.selected_faucet];
        if self.write_clipboard(faucet.url.to_string()) {
            self.status_message = Some((format!("{} URL copied", faucet.name), false));
        }
    }

    /// Writes to the system clipboard, reporting failure through the status
    /// line. Returns true on success.
    fn write_clipboard(&mut self, text: String) -> bool {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => true,
                Err(e) => {
                    self.status_message = Some((format!("Clipboard write failed: {e}"), true));
                    false
                }
            },
            Err(e) => {
                self.status_message = Some((format!("Clipboard unavailable: {e}"), true));
                false
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_key_exits() {
        let mut app = App::new();
        assert!(!app.handle_event(AppEvent::Key(press('q'))));
    }

    #[test]
    fn faucet_selection_stays_in_bounds() {
        let mut app = App::new();
        for _ in 0..20 {
            app.handle_event(AppEvent::Key(press('j')));
        }
        assert_eq!(app.selected_faucet, FAUCETS.len() - 1);

        for _ in 0..20 {
            app.handle_event(AppEvent::Key(press('k')));
        }
        assert_eq!(app.selected_faucet, 0);
    }

    #[test]
    fn generated_wallet_lands_in_controller() {
        let mut app = App::new();
        let wallet = WalletData::generate();
        app.handle_event(AppEvent::WalletGenerated(wallet.clone()));
        assert_eq!(app.controller.wallet(), Some(&wallet));
    }

    #[test]
    fn copy_without_wallet_sets_error_status() {
        let mut app = App::new();
        app.handle_event(AppEvent::Key(press('a')));
        let (msg, is_error) = app.status_message.clone().unwrap();
        assert!(is_error);
        assert!(msg.contains("No wallet"));
    }
}
