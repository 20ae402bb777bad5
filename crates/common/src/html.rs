//! Minimal HTML element tree with escaping.
//!
//! Pages in both services are declared as nested [`Element`] values and
//! rendered on the server. Text and attribute values are always escaped, so
//! user input (search strings, form echoes) can be placed in the tree as-is.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Escaped text content.
    Text(String),
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// HTML element with attributes and children.
///
/// # Examples
/// ```
/// use rentitease_common::html::Element;
///
/// let card = Element::new("div")
///     .id("card")
///     .child(Element::new("h4").text("Bike & <Co>"));
/// assert_eq!(
///     card.render(),
///     r#"<div id="card"><h4>Bike &amp; &lt;Co&gt;</h4></div>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set a boolean attribute such as `checked` when `enabled` is true.
    #[must_use]
    pub fn flag(self, name: &'static str, enabled: bool) -> Self {
        if enabled { self.attr(name, name) } else { self }
    }

    /// Shorthand for the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Shorthand for the `style` attribute.
    #[must_use]
    pub fn style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Attribute value, if set.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for the element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Render the element as HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(element) => element.write_to(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Responder for Element {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        html_response(StatusCode::OK, self.render())
    }
}

/// Complete HTML document with a title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    body: Element,
}

impl Document {
    /// Wrap `body` (which should be a `body` element) in a document.
    pub fn new(title: impl Into<String>, body: Element) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Document body.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Render the full document including the doctype.
    pub fn render(&self) -> String {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(self.title.as_str()));
        let html = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(self.body.clone());
        format!("<!DOCTYPE html>{}", html.render())
    }

    /// Build a response with the given status.
    pub fn into_response(self, status: StatusCode) -> HttpResponse {
        html_response(status, self.render())
    }
}

impl Responder for Document {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response(StatusCode::OK)
    }
}

/// Build a `text/html` response.
pub fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Escape text for use in HTML content and double-quoted attributes.
///
/// # Examples
/// ```
/// use rentitease_common::html::escape;
///
/// assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn void_elements_have_no_closing_tag() {
        let input = Element::new("input").attr("type", "email").attr("id", "login-email");
        assert_eq!(input.render(), r#"<input type="email" id="login-email">"#);
    }

    #[rstest]
    fn attributes_are_escaped_and_replaced() {
        let link = Element::new("a")
            .attr("href", "/?search=\"x\"")
            .attr("href", "/?search=a&b")
            .text("go");
        assert_eq!(link.render(), r#"<a href="/?search=a&amp;b">go</a>"#);
    }

    #[rstest]
    #[case(true, r#"<input checked="checked">"#)]
    #[case(false, "<input>")]
    fn flags_render_only_when_enabled(#[case] enabled: bool, #[case] expected: &str) {
        assert_eq!(Element::new("input").flag("checked", enabled).render(), expected);
    }

    #[rstest]
    fn find_by_id_searches_depth_first() {
        let tree = Element::new("div").child(
            Element::new("section")
                .child(Element::new("p").id("target").text("hello "))
                .child(Element::new("span").text("world")),
        );
        let found = tree.find_by_id("target").expect("target present");
        assert_eq!(found.tag(), "p");
        assert_eq!(tree.text_content(), "hello world");
        assert!(tree.find_by_id("missing").is_none());
    }

    #[rstest]
    fn document_renders_doctype_and_title() {
        let doc = Document::new("Shop <1>", Element::new("body"));
        let html = doc.render();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.contains("<title>Shop &lt;1&gt;</title>"));
        assert!(html.ends_with("<body></body></html>"));
    }
}
