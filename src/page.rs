use std::path::Path;

use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

/// In-memory view of an HTML document. The controller mutates elements in
/// place through this view and the host serializes it back out.
pub struct PageView {
    document: NodeRef,
}

impl PageView {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Ok(Self::parse(&html))
    }

    pub fn body(&self) -> Option<NodeDataRef<ElementData>> {
        self.document.select_first("body").ok()
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeDataRef<ElementData>> {
        let nodes = self.document.select("[id]").ok()?;
        nodes
            .into_iter()
            .find(|node| node.attributes.borrow().get("id") == Some(id))
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document
            .serialize(&mut out)
            .context("serialize document")?;
        String::from_utf8(out).context("document not utf-8")
    }
}

pub fn has_class(el: &NodeDataRef<ElementData>, name: &str) -> bool {
    el.attributes
        .borrow()
        .get("class")
        .map(|classes| classes.split_whitespace().any(|part| part == name))
        .unwrap_or(false)
}

pub fn add_class(el: &NodeDataRef<ElementData>, name: &str) {
    let mut attrs = el.attributes.borrow_mut();
    let current = attrs.get("class").unwrap_or("").to_string();
    if current.split_whitespace().any(|part| part == name) {
        return;
    }
    let mut parts: Vec<&str> = current.split_whitespace().collect();
    parts.push(name);
    attrs.insert("class", parts.join(" "));
}

pub fn remove_class(el: &NodeDataRef<ElementData>, name: &str) {
    let mut attrs = el.attributes.borrow_mut();
    let current = attrs.get("class").unwrap_or("").to_string();
    if !current.split_whitespace().any(|part| part == name) {
        return;
    }
    let kept: Vec<&str> = current
        .split_whitespace()
        .filter(|part| *part != name)
        .collect();
    attrs.insert("class", kept.join(" "));
}

pub fn set_attr(el: &NodeDataRef<ElementData>, name: &str, value: &str) {
    el.attributes.borrow_mut().insert(name, value.to_string());
}

pub fn get_attr(el: &NodeDataRef<ElementData>, name: &str) -> Option<String> {
    el.attributes.borrow().get(name).map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_by_id_finds_exact_match() {
        let page = PageView::parse(
            r#"<body><button id="theme-toggle"></button><i id="theme-icon"></i></body>"#,
        );
        assert!(page.element_by_id("theme-toggle").is_some());
        assert!(page.element_by_id("theme-icon").is_some());
        assert!(page.element_by_id("theme").is_none());
    }

    #[test]
    fn class_helpers_preserve_other_classes() {
        let page = PageView::parse(r#"<body class="wrap mod-skin-light"></body>"#);
        let body = page.body().unwrap();

        assert!(has_class(&body, "mod-skin-light"));
        assert!(!has_class(&body, "mod-skin"));

        remove_class(&body, "mod-skin-light");
        add_class(&body, "mod-skin-dark");
        assert_eq!(
            get_attr(&body, "class").as_deref(),
            Some("wrap mod-skin-dark")
        );
    }

    #[test]
    fn add_class_does_not_duplicate() {
        let page = PageView::parse(r#"<body class="mod-skin-dark"></body>"#);
        let body = page.body().unwrap();
        add_class(&body, "mod-skin-dark");
        assert_eq!(get_attr(&body, "class").as_deref(), Some("mod-skin-dark"));
    }

    #[test]
    fn remove_class_is_noop_when_absent() {
        let page = PageView::parse(r#"<body class="wrap"></body>"#);
        let body = page.body().unwrap();
        remove_class(&body, "mod-skin-dark");
        assert_eq!(get_attr(&body, "class").as_deref(), Some("wrap"));
    }
}
