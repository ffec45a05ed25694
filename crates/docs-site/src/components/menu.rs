//! Open/closed state of the mobile navigation panel

use leptos::*;

use super::icons::Icon;

/// State of the mobile menu. Starts `Closed` on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The state reached by one activation of the toggle button.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Glyph shown on the toggle button.
    pub fn icon(self) -> Icon {
        match self {
            MenuState::Closed => Icon::Menu,
            MenuState::Open => Icon::Close,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

/// Reactive handle to one navbar's menu state.
///
/// The handle is `Copy` so it can move into event handlers and `Show`
/// conditions; all copies refer to the same signal.
#[derive(Clone, Copy, Debug)]
pub struct MenuToggle {
    state: RwSignal<MenuState>,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(MenuState::default()),
        }
    }

    pub fn toggle(&self) {
        self.state.update(|state| *state = state.toggled());
        tracing::debug!(state = ?self.state.get_untracked(), "mobile menu toggled");
    }

    /// Current state, tracked by the enclosing reactive scope.
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new()
    }
}
