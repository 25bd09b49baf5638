#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod component;
mod descriptor;
mod error;
mod formatter;
mod node;
mod props;
mod shaper;
mod types;
mod update_gate;
mod values;

pub use component::FormattedMessage;
pub use descriptor::MessageDescriptor;
pub use error::{CoreError, CoreResult};
pub use formatter::{FormatOptions, MessageFormatter, invoke_format};
pub use node::{ElementType, Formatted, KeyedNode, Node};
pub use props::{ChildrenFn, Props, PropsRest, TagName};
pub use shaper::{OutputMode, RenderOutput, shape};
pub use types::{Key, NodeKey};
pub use update_gate::should_update;
pub use values::{RichTextFn, Value, Values, shallow_eq_values};
