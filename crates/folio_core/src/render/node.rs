//! Typed display-fragment tree and escaping serializer.
//!
//! # Invariants
//! - Free text only enters output through `Node::Text` or attribute values.
//! - Serialization escapes `& < > " '` in both positions.

/// One node of a display fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Self::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Sets an attribute, replacing any previous value for the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            let value = value.into();
            match attrs.iter_mut().find(|(key, _)| *key == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name, value)),
            }
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Shorthand for an element holding a single text child.
    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str()),
            Self::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|value| value.split_whitespace().any(|item| item == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Depth-first search for every descendant carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.collect_by_class(class, found);
        }
    }

    /// Concatenated unescaped text of this subtree.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Element { children, .. } => {
                children.iter().map(Node::text_content).collect::<String>()
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(value) => out.push_str(escape_html(value).as_str()),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(escape_html(value).as_str());
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Escapes text for both element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, Node};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">Tom & 'Jerry'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn serializes_nested_elements_and_void_tags() {
        let node = Node::element("div")
            .class("card")
            .child(Node::element("img").attr("src", "a.png"))
            .child(Node::element("p").with_text("hi"));
        assert_eq!(
            node.to_html(),
            r#"<div class="card"><img src="a.png"><p>hi</p></div>"#
        );
    }

    #[test]
    fn script_text_never_becomes_markup() {
        let node = Node::element("h3").with_text("<script>alert(1)</script>");
        let html = node.to_html();
        assert!(!html.contains("<script>"));
        assert_eq!(node.text_content(), "<script>alert(1)</script>");
    }

    #[test]
    fn attr_replaces_existing_value() {
        let node = Node::element("a").attr("href", "#a").attr("href", "#b");
        assert_eq!(node.get_attr("href"), Some("#b"));
        assert_eq!(node.to_html(), r##"<a href="#b"></a>"##);
    }

    #[test]
    fn finds_descendants_by_class_token() {
        let node = Node::element("div").child(
            Node::element("span")
                .class("project-tag extra")
                .with_text("x"),
        );
        let found = node.find_by_class("project-tag");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text_content(), "x");
    }
}
