//! HTML serialisation of the visual tree.
//!
//! The export document shell is an askama template; element markup is written
//! directly from the tree, with text and attribute values run through askama's
//! HTML escaper.

use askama::filters::{self, Html};
use askama::Template;

use super::tree::{Element, Node, VisualDocument};

/// Web fonts the three font families resolve to. Loading these is what the
/// export settle step waits for.
pub const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?\
family=Inter:wght@300;400;500;600;700&\
family=Merriweather:ital,wght@0,300;0,400;0,700;1,400&\
family=Poppins:wght@300;400;500;600;700&display=swap";

/// Standalone page handed to the PDF converter.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<link rel="stylesheet" href="{{ font_stylesheet_url }}">
<style>@page { size: A4 portrait; margin: 0; } html, body { margin: 0; padding: 0; } * { box-sizing: border-box; } h1, h2, h3, h4, p, ul { margin: 0; }</style>
</head>
<body>
{{ body|safe }}
</body>
</html>
"#,
    ext = "html"
)]
struct ExportDocumentTemplate<'a> {
    font_stylesheet_url: &'a str,
    body: &'a str,
}

impl VisualDocument {
    /// Markup for embedding in a page, wrapped in the preview transform when one
    /// is set.
    pub fn to_html_fragment(&self) -> String {
        let mut out = String::new();
        match self.preview_scale {
            Some(scale) => {
                out.push_str(&format!(
                    "<div data-preview-scale=\"{scale}\" style=\"transform: scale({scale}); transform-origin: top center\">"
                ));
                write_element(&self.root, &mut out);
                out.push_str("</div>");
            }
            None => write_element(&self.root, &mut out),
        }
        out
    }

    /// A complete HTML document for the PDF converter. Always unscaled.
    pub fn to_html_document(&self) -> Result<String, askama::Error> {
        let mut body = String::new();
        write_element(&self.root, &mut body);
        ExportDocumentTemplate {
            font_stylesheet_url: FONT_STYLESHEET_URL,
            body: &body,
        }
        .render()
    }
}

fn write_element(el: &Element, out: &mut String) {
    let tag = el.tag.as_str();
    out.push('<');
    out.push_str(tag);
    if let Some(section) = el.section {
        out.push_str(" data-section=\"");
        out.push_str(section.as_str());
        out.push('"');
    }
    if !el.styles.is_empty() {
        let declarations: Vec<String> = el
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        out.push_str(" style=\"");
        out.push_str(&escape_html(&declarations.join("; ")));
        out.push('"');
    }
    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(child) => write_element(child, out),
            Node::Text(text) => out.push_str(&escape_html(text)),
        }
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escapes text content and double-quoted attribute values alike.
fn escape_html(text: &str) -> String {
    match filters::escape(text, Html) {
        Ok(escaped) => escaped.to_string(),
        Err(_) => String::new(),
    }
}
