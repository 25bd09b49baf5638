use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::NodeKey;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    Fragment,
    Named(Cow<'static, str>),
}

impl ElementType {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        ElementType::Named(name.into())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(String),
    Element {
        tag: ElementType,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn element(tag: ElementType, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyedNode {
    pub key: NodeKey,
    pub node: Node,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Formatted {
    Single(Node),
    Sequence(Vec<Node>),
}

impl Formatted {
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Formatted::Single(node) => alloc::vec![node],
            Formatted::Sequence(nodes) => nodes,
        }
    }
}

impl From<Node> for Formatted {
    fn from(value: Node) -> Self {
        Formatted::Single(value)
    }
}

impl From<Vec<Node>> for Formatted {
    fn from(value: Vec<Node>) -> Self {
        Formatted::Sequence(value)
    }
}
