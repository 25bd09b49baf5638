use crate::{CoreError, CoreResult, ElementType, Formatted, MessageDescriptor, Values};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub ignore_tag: bool,
}

pub trait MessageFormatter {
    fn format_message(
        &self,
        descriptor: &MessageDescriptor,
        values: Option<&Values>,
        options: &FormatOptions,
    ) -> CoreResult<Formatted>;

    // None leaves formatted nodes unwrapped.
    fn text_component(&self) -> Option<ElementType> {
        Some(ElementType::Fragment)
    }
}

pub fn invoke_format(
    formatter: Option<&dyn MessageFormatter>,
    descriptor: &MessageDescriptor,
    values: Option<&Values>,
    ignore_tag: Option<bool>,
) -> CoreResult<Formatted> {
    let formatter = formatter.ok_or(CoreError::MissingFormatter)?;
    let options = FormatOptions {
        ignore_tag: ignore_tag.unwrap_or(false),
    };
    formatter.format_message(descriptor, values, &options)
}
