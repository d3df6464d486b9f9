use maud::{DOCTYPE, Markup, html};

use crate::theme::ThemeState;

/// Builds a minimal standalone page satisfying the toggle's DOM contract:
/// a marker class on `<body>`, a `#theme-toggle` control and a `#theme-icon`
/// glyph inside it.
pub fn build_page(initial: ThemeState) -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { "Theme toggle demo" }
            }
            body class=(initial.marker()) {
                header class="topbar" {
                    button type="button" id="theme-toggle" class="btn" title=(initial.tooltip()) {
                        i id="theme-icon" class=(initial.icon_class()) {}
                    }
                }
                main class="content" {
                    p { "Click the button or press Ctrl/Cmd+K to switch the theme." }
                }
            }
        }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ThemeToggleController;
    use crate::page::PageView;

    #[test]
    fn scaffold_satisfies_dom_contract() {
        let html = build_page(ThemeState::Dark);
        let page = PageView::parse(&html);
        assert!(page.element_by_id("theme-toggle").is_some());
        assert!(page.element_by_id("theme-icon").is_some());
        assert!(html.contains("mod-skin-dark"));
        assert!(!html.contains("mod-skin-light"));
    }

    #[test]
    fn scaffold_binds_without_warning_paths() {
        let html = build_page(ThemeState::Light);
        let page = PageView::parse(&html);
        let controller =
            ThemeToggleController::bind(&page, "theme-toggle", "theme-icon", None).unwrap();
        assert_eq!(controller.state(), ThemeState::Light);
    }
}
