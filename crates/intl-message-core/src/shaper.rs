use alloc::vec::Vec;
use core::fmt;

use crate::{ChildrenFn, ElementType, Formatted, KeyedNode, Node, NodeKey, TagName};

pub enum OutputMode<R> {
    DelegateToCallback(ChildrenFn<R>),
    WrapInElement(ElementType),
    RawSequence,
}

impl<R> OutputMode<R> {
    pub fn select(
        children: Option<&ChildrenFn<R>>,
        tag_name: &TagName,
        text_component: Option<ElementType>,
    ) -> Self {
        if let Some(children) = children {
            return OutputMode::DelegateToCallback(children.clone());
        }
        match tag_name {
            TagName::Wrap(tag) => OutputMode::WrapInElement(tag.clone()),
            TagName::Inherit => match text_component {
                Some(tag) => OutputMode::WrapInElement(tag),
                None => OutputMode::RawSequence,
            },
            TagName::Unwrapped => OutputMode::RawSequence,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OutputMode::DelegateToCallback(_) => "callback",
            OutputMode::WrapInElement(_) => "wrap",
            OutputMode::RawSequence => "raw",
        }
    }
}

impl<R> fmt::Debug for OutputMode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::DelegateToCallback(_) => f.write_str("DelegateToCallback(..)"),
            OutputMode::WrapInElement(tag) => f.debug_tuple("WrapInElement").field(tag).finish(),
            OutputMode::RawSequence => f.write_str("RawSequence"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutput<R = Node> {
    Custom(R),
    Wrapped {
        tag: ElementType,
        children: Vec<KeyedNode>,
    },
    Nodes(Vec<Node>),
}

impl<R> RenderOutput<R> {
    pub fn nodes(&self) -> Option<Vec<&Node>> {
        match self {
            RenderOutput::Custom(_) => None,
            RenderOutput::Wrapped { children, .. } => {
                Some(children.iter().map(|child| &child.node).collect())
            }
            RenderOutput::Nodes(nodes) => Some(nodes.iter().collect()),
        }
    }
}

// Wrapped children are keyed by index so a host reconciler can diff a sequence
// whose length changes between renders.
pub fn shape<R>(formatted: Formatted, mode: OutputMode<R>) -> RenderOutput<R> {
    let nodes = formatted.into_nodes();
    log::trace!("shaping {} node(s) with mode {}", nodes.len(), mode.label());
    match mode {
        OutputMode::DelegateToCallback(children) => RenderOutput::Custom(children(nodes)),
        OutputMode::WrapInElement(tag) => RenderOutput::Wrapped {
            tag,
            children: nodes
                .into_iter()
                .enumerate()
                .map(|(index, node)| KeyedNode {
                    key: NodeKey::new(index),
                    node,
                })
                .collect(),
        },
        OutputMode::RawSequence => RenderOutput::Nodes(nodes),
    }
}
