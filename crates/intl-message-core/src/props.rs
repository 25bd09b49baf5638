use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{ElementType, MessageDescriptor, Node, Value, Values};

pub type ChildrenFn<R> = Arc<dyn Fn(Vec<Node>) -> R + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagName {
    #[default]
    Inherit,
    Wrap(ElementType),
    Unwrapped,
}

pub struct Props<R = Node> {
    pub descriptor: MessageDescriptor,
    pub values: Option<Values>,
    pub tag_name: TagName,
    pub children: Option<ChildrenFn<R>>,
    pub ignore_tag: Option<bool>,
}

impl<R> Props<R> {
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_descriptor(MessageDescriptor::new(id))
    }

    pub fn from_descriptor(descriptor: MessageDescriptor) -> Self {
        Self {
            descriptor,
            values: None,
            tag_name: TagName::Inherit,
            children: None,
            ignore_tag: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = Some(description.into());
        self
    }

    pub fn default_message(mut self, default_message: impl Into<String>) -> Self {
        self.descriptor.default_message = Some(default_message.into());
        self
    }

    pub fn values(mut self, values: Values) -> Self {
        self.values = Some(values);
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values
            .get_or_insert_with(Values::new)
            .insert(name, value);
        self
    }

    pub fn tag_name(mut self, tag: ElementType) -> Self {
        self.tag_name = TagName::Wrap(tag);
        self
    }

    pub fn unwrapped(mut self) -> Self {
        self.tag_name = TagName::Unwrapped;
        self
    }

    pub fn children<F>(mut self, children: F) -> Self
    where
        F: Fn(Vec<Node>) -> R + Send + Sync + 'static,
    {
        self.children = Some(Arc::new(children));
        self
    }

    pub fn ignore_tag(mut self, ignore_tag: bool) -> Self {
        self.ignore_tag = Some(ignore_tag);
        self
    }

    pub fn split(&self) -> (Option<&Values>, PropsRest<'_, R>) {
        let rest = PropsRest {
            descriptor: &self.descriptor,
            tag_name: &self.tag_name,
            children: self.children.as_ref(),
            ignore_tag: self.ignore_tag,
        };
        (self.values.as_ref(), rest)
    }
}

impl<R> Clone for Props<R> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            values: self.values.clone(),
            tag_name: self.tag_name.clone(),
            children: self.children.clone(),
            ignore_tag: self.ignore_tag,
        }
    }
}

impl<R> fmt::Debug for Props<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("descriptor", &self.descriptor)
            .field("values", &self.values)
            .field("tag_name", &self.tag_name)
            .field("children", &self.children.as_ref().map(|_| ".."))
            .field("ignore_tag", &self.ignore_tag)
            .finish()
    }
}

pub struct PropsRest<'a, R> {
    pub descriptor: &'a MessageDescriptor,
    pub tag_name: &'a TagName,
    pub children: Option<&'a ChildrenFn<R>>,
    pub ignore_tag: Option<bool>,
}

impl<R> PropsRest<'_, R> {
    pub fn shallow_eq(&self, other: &PropsRest<'_, R>) -> bool {
        let children_eq = match (self.children, other.children) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.descriptor == other.descriptor
            && self.tag_name == other.tag_name
            && self.ignore_tag == other.ignore_tag
            && children_eq
    }
}
