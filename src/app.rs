//! Application state and core logic

use crate::config::ContactConfig;
use crate::delivery::{DeliveryClientTrait, DeliveryError, EmailJsClient, TemplateParams};
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Email delivery collaborator
    delivery: Arc<dyn DeliveryClientTrait>,
    /// Recipient label sent with every message
    to_name: String,
    /// In-flight delivery, if any
    pending: Option<JoinHandle<Result<(), DeliveryError>>>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App backed by the EmailJS client
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let client = EmailJsClient::new(config)?;
        Ok(Self::with_client(Arc::new(client), config.to_name()))
    }

    /// Create an App around any delivery client
    pub fn with_client(delivery: Arc<dyn DeliveryClientTrait>, to_name: impl Into<String>) -> Self {
        Self {
            state: AppState::default(),
            delivery,
            to_name: to_name.into(),
            pending: None,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_toast();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // AltGr arrives as Ctrl+Alt on Windows and produces a printable character
        let altgr = key
            .modifiers
            .contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !altgr;
        let on_submit = self.state.form.is_submit_active();

        match key.code {
            KeyCode::Char('c') if ctrl => {
                let now = Instant::now();
                if self
                    .last_ctrl_c
                    .is_some_and(|prev| now.duration_since(prev) < DOUBLE_CTRL_C_WINDOW)
                {
                    self.quit = true;
                } else {
                    self.last_ctrl_c = Some(now);
                }
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.try_submit(),
            KeyCode::Enter if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.try_submit()
            }
            KeyCode::Enter if on_submit => self.try_submit(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if self.state.form.is_active_field_multiline() {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a bracketed paste into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        self.state.form.paste(text);
    }

    /// Submit if the submit control is enabled
    fn try_submit(&mut self) {
        if self.state.can_submit() {
            self.handle_submit();
        } else {
            tracing::debug!(
                submitting = self.state.is_submitting,
                missing = ?self.state.form.missing_fields(),
                "Submit ignored: control disabled"
            );
        }
    }

    /// Start delivering the current form contents
    ///
    /// Exactly one delivery call is spawned; the outcome is applied by
    /// [`App::poll_delivery`] or [`App::wait_for_delivery`].
    pub fn handle_submit(&mut self) {
        let submission = self.state.begin_submission();
        let params = TemplateParams::from_submission(&submission, &self.to_name);
        let delivery = Arc::clone(&self.delivery);

        tracing::info!("Submitting contact message");
        self.pending = Some(tokio::spawn(async move { delivery.send(&params).await }));
    }

    /// Whether a delivery is still in flight
    pub fn has_pending_delivery(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the delivery outcome if the call has resolved
    pub async fn poll_delivery(&mut self) {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            self.wait_for_delivery().await;
        }
    }

    /// Wait for the in-flight delivery and apply its outcome
    pub async fn wait_for_delivery(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(result) => result,
            Err(e) => Err(DeliveryError::new(format!("delivery task failed: {e}"))),
        };

        match &outcome {
            Ok(()) => tracing::info!("Contact message delivered"),
            Err(e) => tracing::error!("EmailJS error: {e}"),
        }

        self.state.finish_submission(outcome.is_ok());
    }
}
