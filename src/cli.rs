use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::theme::ThemeState;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EventArg {
    /// Simulated click on the toggle control.
    Click,
    /// Ctrl+K keyboard shortcut.
    CtrlK,
    /// Cmd+K keyboard shortcut (macOS).
    CmdK,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StartTheme {
    Light,
    Dark,
}

impl From<StartTheme> for ThemeState {
    fn from(start: StartTheme) -> Self {
        match start {
            StartTheme::Light => ThemeState::Light,
            StartTheme::Dark => ThemeState::Dark,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// HTML page to operate on. The page must already carry its theme;
    /// this tool only reacts to and toggles it.
    #[arg(long, conflicts_with = "scaffold")]
    pub input: Option<PathBuf>,

    /// Generate the built-in demo page with the given starting theme
    /// instead of reading `--input`.
    #[arg(long, value_enum)]
    pub scaffold: Option<StartTheme>,

    /// Events to replay against the page, in order.
    #[arg(long = "event", value_enum)]
    pub events: Vec<EventArg>,

    /// Output HTML path (stdout if omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Id of the toggle control element.
    #[arg(long, default_value = "theme-toggle")]
    pub toggle_id: String,

    /// Id of the icon element.
    #[arg(long, default_value = "theme-icon")]
    pub icon_id: String,

    /// JSON settings file to persist the preference to after each toggle.
    ///
    /// Without it the toggle still applies visually; the preference is just
    /// not saved anywhere.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}
