use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::events::AppEvent;
use crate::ui::profile::{ProfileContainer, ProfileState};

/// Top-level UI state: the profile container plus quit handling.
pub struct App {
    should_quit: bool,
    profile: ProfileContainer,
}

impl App {
    pub fn new(profile: ProfileContainer) -> Self {
        Self {
            should_quit: false,
            profile,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn profile(&self) -> &ProfileContainer {
        &self.profile
    }

    pub fn profile_state(&self) -> &ProfileState {
        self.profile.state()
    }

    /// Start the profile fetch. Safe to call repeatedly.
    pub fn activate(&mut self) -> bool {
        self.profile.activate()
    }

    /// Pull in finished background work. Returns whether a redraw is due.
    pub fn sync(&mut self) -> bool {
        self.profile.apply_pending()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c'));
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.request_quit();
        }
    }

    /// Route one input event. Resizes need nothing beyond the redraw the
    /// loop does anyway; the frame size is read at draw time.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize | AppEvent::Tick => {}
        }
    }

    pub fn teardown(&mut self) {
        self.profile.teardown();
    }
}
