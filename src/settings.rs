use std::path::PathBuf;

use serde::Serialize;

use crate::controller::PreferenceSink;
use crate::theme::ThemeState;

#[derive(Debug, Serialize)]
struct Settings<'a> {
    theme: &'a str,
}

/// File-backed preference sink: rewrites a small JSON settings file after
/// each toggle. Write failures are logged, never propagated; the toggle has
/// already applied visually by the time the sink runs.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceSink for SettingsFile {
    fn save(&mut self, theme: ThemeState) {
        let settings = Settings {
            theme: theme.as_str(),
        };
        match serde_json::to_vec_pretty(&settings) {
            Ok(bytes) => {
                if let Err(err) = std::fs::write(&self.path, bytes) {
                    tracing::warn!(
                        path = %self.path.display(),
                        %err,
                        "failed to write theme preference"
                    );
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode theme preference"),
        }
    }
}
