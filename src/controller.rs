//! Wallet display state machine.
//!
//! Pure state with no I/O. The terminal front end owns the clipboard, the
//! timers, and the spawned generation task, and drives this controller with
//! events; timestamps are passed in explicitly.

use std::time::{Duration, Instant};

use crate::wallet::WalletData;

/// Minimum duration a generation appears in-flight. Feedback measure only;
/// key generation itself is effectively instant.
pub const GENERATE_MIN_DELAY: Duration = Duration::from_millis(300);

/// How long a "just copied" indicator stays up before reverting.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Which wallet field was last copied to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopiedField {
    Address,
    PrivateKey,
}

/// State behind the wallet display: the current wallet plus the UI flags
/// that control how it is rendered.
#[derive(Debug, Default)]
pub struct WalletController {
    wallet: Option<WalletData>,
    generating: bool,
    private_key_visible: bool,
    copied: Option<(CopiedField, Instant)>,
}

impl WalletController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current wallet, if one has been generated.
    pub fn wallet(&self) -> Option<&WalletData> {
        self.wallet.as_ref()
    }

    /// Returns true while a generation is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Marks a generation as started.
    ///
    /// Returns false without changing state if one is already in flight, so
    /// a held-down key cannot queue up generations.
    pub fn begin_generate(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        true
    }

    /// Installs a freshly generated wallet, replacing any previous one.
    ///
    /// The private key always comes back hidden and any copied indicator is
    /// cleared: it referred to the discarded wallet.
    pub fn finish_generate(&mut self, wallet: WalletData) {
        self.wallet = Some(wallet);
        self.generating = false;
        self.private_key_visible = false;
        self.copied = None;
    }

    /// Records a successful clipboard write of `field` at `now`.
    pub fn mark_copied(&mut self, field: CopiedField, now: Instant) {
        self.copied = Some((field, now));
    }

    /// Returns the field whose copy indicator is still within its display
    /// window, if any.
    pub fn copied_field(&self, now: Instant) -> Option<CopiedField> {
        match self.copied {
            Some((field, at)) if now.duration_since(at) < COPY_FEEDBACK_WINDOW => Some(field),
            _ => None,
        }
    }

    /// Expires a copied indicator whose display window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_field(now).is_none() {
            self.copied = None;
        }
    }

    /// Flips whether the private key is shown in clear. Returns the new
    /// visibility.
    pub fn toggle_visibility(&mut self) -> bool {
        self.private_key_visible = !self.private_key_visible;
        self.private_key_visible
    }

    pub fn private_key_visible(&self) -> bool {
        self.private_key_visible
    }

    /// The private key as it should be rendered right now: clear when
    /// visible, masked otherwise. None until a wallet exists.
    pub fn displayed_private_key(&self) -> Option<String> {
        self.wallet.as_ref().map(|w| {
            if self.private_key_visible {
                w.private_key.clone()
            } else {
                w.masked_private_key()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(tag: char) -> WalletData {
        WalletData {
            address: format!("0x{}", tag.to_string().repeat(40)),
            private_key: format!("0x{}", tag.to_string().repeat(64)),
        }
    }

    #[test]
    fn generation_lifecycle() {
        let mut ctl = WalletController::new();
        assert!(ctl.wallet().is_none());

        assert!(ctl.begin_generate());
        assert!(ctl.is_generating());
        // Re-entry while in flight is rejected.
        assert!(!ctl.begin_generate());

        ctl.finish_generate(wallet('a'));
        assert!(!ctl.is_generating());
        assert_eq!(ctl.wallet().unwrap().address, wallet('a').address);
    }

    #[test]
    fn regeneration_replaces_wallet_and_hides_key() {
        let mut ctl = WalletController::new();
        ctl.begin_generate();
        ctl.finish_generate(wallet('a'));
        ctl.toggle_visibility();
        assert!(ctl.private_key_visible());

        ctl.begin_generate();
        ctl.finish_generate(wallet('b'));
        assert_eq!(ctl.wallet().unwrap().address, wallet('b').address);
        assert!(!ctl.private_key_visible());
    }

    #[test]
    fn copied_indicator_expires_after_window() {
        let mut ctl = WalletController::new();
        let t0 = Instant::now();

        ctl.mark_copied(CopiedField::Address, t0);
        assert_eq!(ctl.copied_field(t0), Some(CopiedField::Address));
        assert_eq!(
            ctl.copied_field(t0 + Duration::from_millis(1900)),
            Some(CopiedField::Address)
        );
        assert_eq!(ctl.copied_field(t0 + COPY_FEEDBACK_WINDOW), None);

        ctl.tick(t0 + COPY_FEEDBACK_WINDOW);
        assert_eq!(ctl.copied_field(t0), None);
    }

    #[test]
    fn copying_one_field_supersedes_the_other() {
        let mut ctl = WalletController::new();
        let t0 = Instant::now();

        ctl.mark_copied(CopiedField::Address, t0);
        ctl.mark_copied(CopiedField::PrivateKey, t0 + Duration::from_millis(500));
        assert_eq!(
            ctl.copied_field(t0 + Duration::from_millis(600)),
            Some(CopiedField::PrivateKey)
        );
    }

    #[test]
    fn visibility_toggle_is_idempotent_over_two_calls() {
        let mut ctl = WalletController::new();
        ctl.begin_generate();
        ctl.finish_generate(wallet('a'));

        let initial = ctl.private_key_visible();
        assert!(ctl.toggle_visibility());
        assert!(!ctl.toggle_visibility());
        assert_eq!(ctl.private_key_visible(), initial);
    }

    #[test]
    fn displayed_key_respects_visibility() {
        let mut ctl = WalletController::new();
        assert!(ctl.displayed_private_key().is_none());

        ctl.begin_generate();
        ctl.finish_generate(wallet('a'));

        let masked = ctl.displayed_private_key().unwrap();
        assert!(masked.contains('\u{2022}'));

        ctl.toggle_visibility();
        let clear = ctl.displayed_private_key().unwrap();
        assert_eq!(clear, wallet('a').private_key);
    }
}
