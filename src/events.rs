/// Input events the host forwards to the controller. Mirrors the two DOM
/// subscriptions: clicks anywhere on the page and global keydown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Click { target_id: Option<String> },
    Key { key: char, ctrl: bool, meta: bool },
}

impl InputEvent {
    pub fn click(target_id: &str) -> Self {
        InputEvent::Click {
            target_id: Some(target_id.to_string()),
        }
    }

    /// Ctrl-or-Meta + "k", matched page-wide regardless of target.
    pub fn is_toggle_shortcut(&self) -> bool {
        matches!(
            self,
            InputEvent::Key {
                key: 'k',
                ctrl,
                meta,
            } if *ctrl || *meta
        )
    }
}
