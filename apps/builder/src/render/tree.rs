//! The visual tree every layout produces.
//!
//! Deliberately small: elements with a tag, inline style declarations, an
//! optional resume-section marker and children. Export serialises it to HTML.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Header,
    Section,
    Aside,
    Main,
    H1,
    H2,
    H3,
    H4,
    P,
    Span,
    Ul,
    Li,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Section => "section",
            Tag::Aside => "aside",
            Tag::Main => "main",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(self, Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4)
    }
}

/// Which part of the resume an element presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    pub styles: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            section: None,
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn styles<I, V>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        self.styles
            .extend(declarations.into_iter().map(|(p, v)| (p, v.into())));
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends the child only when there is one; layouts use this for
    /// sections that vanish on empty data.
    pub fn maybe_child(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Value of the last declaration for `property`, if any.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Visits this element and every descendant element, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(el) = child {
                el.walk(visit);
            }
        }
    }

    pub fn find_section(&self, section: Section) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |el| {
            if found.is_none() && el.section == Some(section) {
                found = Some(el);
            }
        });
        found
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// A rendered page plus the on-screen preview scale, if one is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDocument {
    pub root: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_scale: Option<f32>,
}

impl VisualDocument {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            preview_scale: None,
        }
    }

    /// Shrinks the page for on-screen display. Capture must undo this.
    pub fn with_preview_scale(mut self, scale: f32) -> Self {
        self.preview_scale = Some(scale);
        self
    }

    /// The same page at full 210mm width.
    pub fn unscaled(&self) -> Self {
        Self {
            root: self.root.clone(),
            preview_scale: None,
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.root.find_section(section).is_some()
    }

    pub fn sections(&self) -> Vec<Section> {
        let mut out = Vec::new();
        self.root.walk(&mut |el| {
            if let Some(section) = el.section {
                if !out.contains(&section) {
                    out.push(section);
                }
            }
        });
        out
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }
}
