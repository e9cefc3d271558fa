//! Central application state for Postcraft
//!
//! Holds the two pieces of document state (markdown text and signature),
//! the selected color scheme, the committed preview tree, and transient UI
//! state. The markdown text and signature are ephemeral by design: they
//! live only in memory and are lost when the app exits.

use crate::config::{load_config, Settings};
use crate::markdown::MarkdownDocument;
use crate::render::RenderOutcome;
use crate::scheme::ColorScheme;
use log::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient UI state.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast message should expire (seconds since app start)
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
#[derive(Debug)]
pub struct AppState {
    /// The markdown source being edited (in memory only)
    pub document: String,
    /// Decorative signature appended to the card (in memory only)
    pub signature: String,
    /// User settings (loaded from config)
    pub settings: Settings,
    /// UI-related state
    pub ui: UiState,
    /// The committed preview tree (already sanitized)
    pub preview: MarkdownDocument,
    /// Sequence token of the committed preview
    pub committed_seq: u64,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create a new AppState with settings loaded from config and the
    /// starter document in the editor.
    pub fn new() -> Self {
        let settings = load_config();
        info!(
            "AppState initialized (scheme: {})",
            settings.color_scheme.id()
        );

        Self {
            document: Self::starter_document().to_string(),
            signature: "Created with ❤️".to_string(),
            settings,
            ui: UiState::default(),
            preview: MarkdownDocument::empty(),
            committed_seq: 0,
            settings_dirty: false,
        }
    }

    /// The sample document new sessions start with.
    pub fn starter_document() -> &'static str {
        "# Today's share ✨\n\n\
         ## Three tips for better posts\n\n\
         - 💡 Lead with a playful hook\n\
         - 🎨 Keep the layout airy\n\
         - 📸 Pick a title that pops\n\n\
         Remember to **follow me** for more~\n\n\
         > Make every day a little celebration 🌸"
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scheme Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Currently selected color scheme.
    pub fn scheme(&self) -> ColorScheme {
        self.settings.color_scheme
    }

    /// Change the selected scheme; persisted as a preference.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        if self.settings.color_scheme != scheme {
            debug!("Color scheme changed to {}", scheme.id());
            self.settings.color_scheme = scheme;
            self.mark_settings_dirty();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Preview Commits
    // ─────────────────────────────────────────────────────────────────────────

    /// Commit a completed render to the preview.
    ///
    /// The render worker has already filtered stale results; the token is
    /// kept so the UI can tell whether a newer conversion is still pending.
    pub fn commit_render(&mut self, outcome: RenderOutcome) {
        if outcome.stripped > 0 {
            debug!(
                "Sanitizer neutralized {} node(s) in the preview",
                outcome.stripped
            );
        }
        self.preview = outcome.document;
        self.committed_seq = outcome.seq;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark settings as needing a save.
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Take the dirty flag, resetting it.
    pub fn take_settings_dirty(&mut self) -> bool {
        std::mem::take(&mut self.settings_dirty)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toast Messages
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a temporary toast message in the status bar.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Expire the toast if its time has passed.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_markdown;

    #[test]
    fn test_starter_document_parses() {
        let doc = parse_markdown(AppState::starter_document());
        assert!(!doc.root.children.is_empty());
        let text = doc.root.text_content();
        assert!(text.contains("follow me"));
    }

    #[test]
    fn test_set_scheme_marks_dirty() {
        let mut state = AppState::new();
        state.take_settings_dirty();

        state.set_scheme(ColorScheme::OceanBlue);
        assert_eq!(state.scheme(), ColorScheme::OceanBlue);
        assert!(state.take_settings_dirty());

        // Setting the same scheme again is not a change
        state.set_scheme(ColorScheme::OceanBlue);
        assert!(!state.take_settings_dirty());
    }

    #[test]
    fn test_commit_render_updates_preview_and_token() {
        let mut state = AppState::new();
        let outcome = RenderOutcome {
            seq: 7,
            document: parse_markdown("# committed"),
            stripped: 0,
        };
        state.commit_render(outcome);

        assert_eq!(state.committed_seq, 7);
        assert!(state.preview.root.text_content().contains("committed"));
    }

    #[test]
    fn test_toast_expires() {
        let mut state = AppState::new();
        state.show_toast("saved", 10.0, 3.0);
        assert!(state.ui.toast_message.is_some());

        state.update_toast(12.0);
        assert!(state.ui.toast_message.is_some());

        state.update_toast(13.0);
        assert!(state.ui.toast_message.is_none());
        assert!(state.ui.toast_expires_at.is_none());
    }

    #[test]
    fn test_preview_starts_empty() {
        let state = AppState::new();
        assert!(state.preview.root.children.is_empty());
        assert_eq!(state.committed_seq, 0);
    }
}
