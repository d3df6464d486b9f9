/// Marker class carried on `<body>` while dark mode is active.
pub const DARK_MARKER: &str = "mod-skin-dark";
/// Marker class carried on `<body>` while light mode is active.
pub const LIGHT_MARKER: &str = "mod-skin-light";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    Light,
    Dark,
}

impl ThemeState {
    pub fn opposite(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ThemeState::Light => LIGHT_MARKER,
            ThemeState::Dark => DARK_MARKER,
        }
    }

    /// Icon glyph shown while this state is active. The glyph advertises the
    /// state a toggle would switch to, not the current one.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemeState::Light => "fal fa-moon",
            ThemeState::Dark => "fal fa-sun",
        }
    }

    /// Tooltip for the toggle control, describing the action on activation.
    pub fn tooltip(self) -> &'static str {
        match self {
            ThemeState::Light => "Switch to dark mode",
            ThemeState::Dark => "Switch to light mode",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_round_trips() {
        assert_eq!(ThemeState::Light.opposite(), ThemeState::Dark);
        assert_eq!(ThemeState::Dark.opposite().opposite(), ThemeState::Dark);
    }

    #[test]
    fn icon_advertises_destination() {
        assert_eq!(ThemeState::Dark.icon_class(), "fal fa-sun");
        assert_eq!(ThemeState::Light.icon_class(), "fal fa-moon");
    }

    #[test]
    fn tooltip_describes_destination() {
        assert_eq!(ThemeState::Dark.tooltip(), "Switch to light mode");
        assert_eq!(ThemeState::Light.tooltip(), "Switch to dark mode");
    }
}
