use kuchiki::{ElementData, NodeDataRef};

use crate::events::InputEvent;
use crate::page::{self, PageView};
use crate::theme::ThemeState;

/// Destination for the user's theme choice, supplied by the host. Absence is
/// a degraded mode, not an error: toggles still apply visually.
pub trait PreferenceSink {
    fn save(&mut self, theme: ThemeState);
}

impl<F: FnMut(ThemeState)> PreferenceSink for F {
    fn save(&mut self, theme: ThemeState) {
        self(theme)
    }
}

/// Flips the theme marker on `<body>`, keeps the icon and tooltip in sync,
/// and forwards each change to the preference sink.
///
/// The controller owns the current [`ThemeState`]; the class attributes on
/// the page are a view it writes to, never the source of truth.
pub struct ThemeToggleController {
    body: NodeDataRef<ElementData>,
    control: NodeDataRef<ElementData>,
    icon: NodeDataRef<ElementData>,
    control_id: String,
    state: ThemeState,
    sink: Option<Box<dyn PreferenceSink>>,
}

impl ThemeToggleController {
    /// Resolves the toggle control and icon on the page and synchronizes the
    /// icon with whatever theme the page arrived with.
    ///
    /// Returns `None` when the body or either element is missing: the
    /// feature disables itself after a warning and the page is left alone.
    pub fn bind(
        page: &PageView,
        control_id: &str,
        icon_id: &str,
        sink: Option<Box<dyn PreferenceSink>>,
    ) -> Option<Self> {
        let Some(body) = page.body() else {
            tracing::warn!("document has no <body>; theme toggle disabled");
            return None;
        };
        let control = page.element_by_id(control_id);
        let icon = page.element_by_id(icon_id);
        let (Some(control), Some(icon)) = (control, icon) else {
            tracing::warn!(
                control_id,
                icon_id,
                "theme toggle elements not found; theme toggle disabled"
            );
            return None;
        };

        // The page arrives with its theme already applied; anything without
        // the dark marker counts as light. Rewriting both markers here keeps
        // the one-marker invariant even for pages that carried neither.
        let state = if page::has_class(&body, ThemeState::Dark.marker()) {
            ThemeState::Dark
        } else {
            ThemeState::Light
        };
        page::remove_class(&body, state.opposite().marker());
        page::add_class(&body, state.marker());

        let controller = Self {
            body,
            control,
            icon,
            control_id: control_id.to_string(),
            state,
            sink,
        };
        controller.render_icon();
        tracing::info!(
            theme = controller.state.as_str(),
            shortcut = "ctrl/cmd+k",
            "theme toggle initialized"
        );
        Some(controller)
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Points the icon at the opposite theme and updates the tooltip.
    fn render_icon(&self) {
        page::set_attr(&self.icon, "class", self.state.icon_class());
        page::set_attr(&self.control, "title", self.state.tooltip());
        tracing::debug!(theme = self.state.as_str(), "icon synchronized");
    }

    /// Flips the theme, resyncs the icon, and notifies the sink if present.
    pub fn toggle(&mut self) {
        let next = self.state.opposite();
        page::remove_class(&self.body, self.state.marker());
        page::add_class(&self.body, next.marker());
        self.state = next;
        self.render_icon();

        match self.sink.as_mut() {
            Some(sink) => {
                sink.save(self.state);
                tracing::info!(theme = self.state.as_str(), "theme toggled; preference saved");
            }
            None => {
                tracing::warn!(
                    theme = self.state.as_str(),
                    "no preference sink configured; theme will not persist"
                );
            }
        }
    }

    /// Routes one event. Returns true when the event was consumed and the
    /// host should suppress its default action.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click { target_id } => {
                if target_id.as_deref() == Some(self.control_id.as_str()) {
                    self.toggle();
                    true
                } else {
                    false
                }
            }
            InputEvent::Key { .. } => {
                if event.is_toggle_shortcut() {
                    self.toggle();
                    true
                } else {
                    false
                }
            }
        }
    }
}
