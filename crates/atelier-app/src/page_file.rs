//! Lesson page descriptions.
//!
//! A page file is a TOML list of elements; handler and argument metadata
//! land in the same declarative attributes the registry reads, so one
//! `register_page` pass binds everything. The built-in sample page keeps
//! the shell usable with no files at all.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use atelier_bridge::page::{ARGS_ATTRIBUTE, HANDLER_ATTRIBUTE};
use atelier_bridge::preview;
use atelier_bridge::{Element, Page};
use atelier_common::ConfigError;

#[derive(Debug, Deserialize)]
struct PageFile {
    #[serde(default)]
    element: Vec<ElementEntry>,
}

#[derive(Debug, Deserialize)]
struct ElementEntry {
    id: String,
    #[serde(default = "default_tag")]
    tag: String,
    handler: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    args: Option<toml::Value>,
}

fn default_tag() -> String {
    "div".into()
}

/// Load a page description from a TOML file.
pub fn load_page(path: &Path) -> Result<Page, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::PageError(format!("failed to read {}: {e}", path.display())))?;

    let file: PageFile = toml::from_str(&content)
        .map_err(|e| ConfigError::PageError(format!("failed to parse {}: {e}", path.display())))?;

    let mut page = Page::new();
    for entry in file.element {
        if entry.id.trim().is_empty() {
            warn!("page element without id skipped");
            continue;
        }
        let mut element = Element::new(entry.id, entry.tag).with_text(entry.text);
        for (name, value) in entry.attributes {
            element.set_attribute(name, value);
        }
        if let Some(handler) = entry.handler {
            element.set_attribute(HANDLER_ATTRIBUTE, handler);
        }
        if let Some(args) = entry.args {
            element.set_attribute(ARGS_ATTRIBUTE, toml_to_json(&args).to_string());
        }
        page.insert(element);
    }
    Ok(page)
}

/// The page used when no description file is configured.
pub fn sample_page() -> Page {
    let mut page = Page::new();
    page.insert(
        Element::new("run-date", "button")
            .with_attribute(HANDLER_ATTRIBUTE, "terminal:execute")
            .with_attribute(ARGS_ATTRIBUTE, r#"{"command":"date"}"#)
            .with_text("Run date"),
    );
    page.insert(
        Element::new("run-uptime-all", "button")
            .with_attribute(HANDLER_ATTRIBUTE, "terminal:execute-all")
            .with_attribute(ARGS_ATTRIBUTE, r#"{"command":"uptime"}"#)
            .with_text("Run uptime everywhere"),
    );
    page.insert(
        Element::new("clear-terminal", "button")
            .with_attribute(HANDLER_ATTRIBUTE, "terminal:clear")
            .with_text("Clear"),
    );
    page.insert(
        Element::new("interrupt-all", "button")
            .with_attribute(HANDLER_ATTRIBUTE, "terminal:interrupt-all")
            .with_text("Interrupt everything"),
    );
    page.insert(
        Element::new("open-editor", "button")
            .with_attribute(HANDLER_ATTRIBUTE, "dashboard:expose")
            .with_attribute(ARGS_ATTRIBUTE, r#"{"name":"editor"}"#)
            .with_text("Open editor"),
    );
    page.insert(
        Element::new("docs-link", "a")
            .with_attribute("href", "https://docs.example.com/guide")
            .with_text("Further reading"),
    );
    page.insert(Element::new(preview::PREVIEW_IMAGE_ELEMENT, "img"));
    page.insert(Element::new(preview::PREVIEW_IMAGE_TITLE, "span"));
    page.insert(Element::new(preview::PREVIEW_IMAGE_DIALOG, "dialog"));
    page
}

/// Convert a TOML value into the JSON form argument objects use.
fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::Number((*i).into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_page(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_page_builds_elements_with_metadata() {
        let file = write_page(
            r#"
            [[element]]
            id = "run-ls"
            tag = "button"
            handler = "terminal:execute"
            text = "Run ls"

            [element.args]
            command = "ls"
            session = "2"
            clear = true
            "#,
        );
        let page = load_page(file.path()).unwrap();

        let element = page.element("run-ls").unwrap();
        assert_eq!(element.tag(), "button");
        assert_eq!(element.handler(), Some("terminal:execute"));
        assert_eq!(element.text(), "Run ls");

        let args: serde_json::Value = serde_json::from_str(element.args().unwrap()).unwrap();
        assert_eq!(args["command"], "ls");
        assert_eq!(args["session"], "2");
        assert_eq!(args["clear"], true);
    }

    #[test]
    fn load_page_defaults_tag_and_skips_blank_ids() {
        let file = write_page(
            r#"
            [[element]]
            id = "note"
            text = "plain element"

            [[element]]
            id = "  "
            handler = "terminal:clear"
            "#,
        );
        let page = load_page(file.path()).unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page.element("note").unwrap().tag(), "div");
    }

    #[test]
    fn load_page_keeps_plain_attributes() {
        let file = write_page(
            r#"
            [[element]]
            id = "guide"
            tag = "a"

            [element.attributes]
            href = "https://elsewhere.com/guide"
            "#,
        );
        let page = load_page(file.path()).unwrap();
        assert_eq!(
            page.element("guide").unwrap().attribute("href"),
            Some("https://elsewhere.com/guide")
        );
    }

    #[test]
    fn unreadable_or_bad_file_is_a_page_error() {
        let err = load_page(Path::new("/nonexistent/page.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::PageError(_)));

        let file = write_page("not [valid toml");
        let err = load_page(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PageError(_)));
    }

    #[test]
    fn sample_page_declares_known_handlers_and_modal() {
        let page = sample_page();

        assert_eq!(
            page.element("run-date").unwrap().handler(),
            Some("terminal:execute")
        );
        assert!(page.element(preview::PREVIEW_IMAGE_DIALOG).is_some());
        assert!(page.element("docs-link").unwrap().attribute("href").is_some());
    }

    #[test]
    fn toml_args_convert_to_json() {
        let value: toml::Value = toml::from_str(
            r#"
            command = "ls"
            clear = true
            retries = 3
            tags = ["a", "b"]
            "#,
        )
        .unwrap();
        let json = toml_to_json(&value);

        assert_eq!(json["command"], "ls");
        assert_eq!(json["clear"], true);
        assert_eq!(json["retries"], 3);
        assert_eq!(json["tags"][1], "b");
    }
}
