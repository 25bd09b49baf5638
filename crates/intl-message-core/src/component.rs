use crate::{
    CoreResult, MessageFormatter, Node, OutputMode, Props, RenderOutput, invoke_format, shape,
    should_update,
};

pub struct FormattedMessage<R = Node> {
    props: Props<R>,
}

impl<R> FormattedMessage<R> {
    pub const DISPLAY_NAME: &'static str = "FormattedMessage";

    pub fn new(props: Props<R>) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &Props<R> {
        &self.props
    }

    pub fn should_update(&self, next: &Props<R>) -> bool {
        should_update(&self.props, next)
    }

    pub fn receive(&mut self, next: Props<R>) -> bool {
        let update = self.should_update(&next);
        self.props = next;
        update
    }

    pub fn render(&self, formatter: Option<&dyn MessageFormatter>) -> CoreResult<RenderOutput<R>> {
        let props = &self.props;
        let formatted = invoke_format(
            formatter,
            &props.descriptor,
            props.values.as_ref(),
            props.ignore_tag,
        )?;
        let text_component = formatter.and_then(|formatter| formatter.text_component());
        let mode = OutputMode::select(props.children.as_ref(), &props.tag_name, text_component);
        Ok(shape(formatted, mode))
    }
}
