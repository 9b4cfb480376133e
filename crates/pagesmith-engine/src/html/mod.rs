//! # HTML Node Tree
//!
//! The render target of the compiler: a minimal tree of HTML elements with
//! exactly two shapes, leaf and parent. Attributes are insertion-ordered
//! `(key, value)` pairs. Text and attribute values are emitted verbatim,
//! with no escaping applied anywhere.

use thiserror::Error;

/// Structural violations detected while rendering a node tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A leaf node was built without a value. An empty string is a legal
    /// value; `None` is not.
    #[error("leaf node has no value")]
    MissingValue,
    /// A parent node was built with an empty tag.
    #[error("parent node has no tag")]
    MissingTag,
    /// A parent node has nothing to wrap.
    #[error("parent node <{0}> has no children")]
    EmptyChildren(String),
}

/// A renderable HTML element.
///
/// The variant set is closed: text content and void-ish elements are leaves,
/// container elements are parents that own their subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Terminal element. With no tag it renders as bare text; with a tag it
    /// renders as `<tag attrs>value</tag>`.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    /// Container element wrapping one or more children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// An untagged text leaf, rendered verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf such as `<b>text</b>`.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf carrying attributes, such as `<a href="…">text</a>`.
    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs,
        }
    }

    /// A container element wrapping already-built children.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    /// A container element with attributes.
    pub fn parent_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs,
        }
    }

    /// Renders this node and its subtree to markup text.
    ///
    /// A valueless leaf, an untagged parent, or a childless parent anywhere
    /// in the subtree aborts the whole render.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_ref().ok_or(RenderError::MissingValue)?;
                match tag {
                    None => Ok(value.clone()),
                    Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs))),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::EmptyChildren(tag.clone()));
                }
                let mut inner = String::new();
                for child in children {
                    inner.push_str(&child.render()?);
                }
                Ok(format!("<{tag}{}>{inner}</{tag}>", render_attrs(attrs)))
            }
        }
    }
}

/// Renders attributes as ` key="value"` pairs in insertion order.
///
/// Empty string when there are no attributes. Values are emitted verbatim.
fn render_attrs(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out
}
