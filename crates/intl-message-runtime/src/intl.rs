use std::path::{Path, PathBuf};

use intl_message_core::{
    CoreError, CoreResult, ElementType, FormatOptions, Formatted, Key, MessageDescriptor,
    MessageFormatter, Node, Value, Values,
};

use crate::catalog::Catalog;
use crate::config::IntlConfig;
use crate::error::RuntimeResult;
use crate::loader::{load_catalog, load_config_or_default};
use crate::template::{Part, TemplateError, parse_template};

#[derive(Debug, Clone)]
pub struct Intl {
    config: IntlConfig,
    catalog: Catalog,
    text_component: Option<ElementType>,
}

impl Intl {
    pub fn new(config: IntlConfig, catalog: Catalog) -> Self {
        let text_component = config.text_component();
        Self {
            config,
            catalog,
            text_component,
        }
    }

    pub fn from_config(config: IntlConfig) -> RuntimeResult<Self> {
        Self::from_config_in(config, Path::new("."))
    }

    pub fn load(path: &Path) -> RuntimeResult<Self> {
        let config = load_config_or_default(path)?;
        let root = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_config_in(config, &root)
    }

    fn from_config_in(config: IntlConfig, root: &Path) -> RuntimeResult<Self> {
        let catalog = match &config.messages_path {
            Some(messages_path) => load_catalog(&root.join(messages_path))?,
            None => Catalog::new(),
        };
        Ok(Self::new(config, catalog))
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn format_to_string(
        &self,
        descriptor: &MessageDescriptor,
        values: Option<&Values>,
    ) -> CoreResult<String> {
        let formatted = self.format_message(descriptor, values, &FormatOptions::default())?;
        Ok(formatted
            .into_nodes()
            .iter()
            .map(Node::text_content)
            .collect())
    }

    fn uses_default_locale(&self) -> bool {
        self.locale().eq_ignore_ascii_case(self.default_locale())
    }

    fn resolve_template<'d>(&'d self, key: &Key, descriptor: &'d MessageDescriptor) -> &'d str {
        if let Some(template) = self.catalog.get(key.as_str()) {
            return template;
        }
        match descriptor.default_message() {
            Some(default_message) => {
                if !self.uses_default_locale() {
                    log::warn!(
                        "missing translation for {key:?} in {}, using default message",
                        self.locale()
                    );
                }
                default_message
            }
            None => {
                log::warn!("no message or default message for {key:?}, rendering the id");
                descriptor.id()
            }
        }
    }
}

impl MessageFormatter for Intl {
    fn format_message(
        &self,
        descriptor: &MessageDescriptor,
        values: Option<&Values>,
        options: &FormatOptions,
    ) -> CoreResult<Formatted> {
        let key = Key::new(descriptor.id())?;
        let template = self.resolve_template(&key, descriptor);
        let parts = parse_template(template, options.ignore_tag)
            .map_err(|err| template_error(&key, err))?;
        let nodes = evaluate(&parts, values)?;
        Ok(collapse(nodes))
    }

    fn text_component(&self) -> Option<ElementType> {
        self.text_component.clone()
    }
}

fn template_error(key: &Key, err: TemplateError) -> CoreError {
    CoreError::Format(format!("{key}: {} at offset {}", err.message, err.offset))
}

fn evaluate(parts: &[Part], values: Option<&Values>) -> CoreResult<Vec<Node>> {
    let mut out = Vec::new();
    for part in parts {
        match part {
            Part::Text(text) => push_node(&mut out, Node::text(text.as_str())),
            Part::Argument(name) => {
                let value = require(values, name)?;
                push_node(&mut out, render_value(value)?);
            }
            Part::Tag { name, children } => {
                let children = evaluate(children, values)?;
                match values.and_then(|values| values.get(name)) {
                    Some(Value::RichText(render)) => push_node(&mut out, render(children)),
                    Some(other) => {
                        return Err(CoreError::Format(format!(
                            "value for <{name}> must be a rich text function, got {}",
                            other.kind()
                        )));
                    }
                    None => {
                        return Err(CoreError::Format(format!(
                            "no rich text function provided for <{name}>"
                        )));
                    }
                }
            }
        }
    }
    Ok(out)
}

fn require<'v>(values: Option<&'v Values>, name: &str) -> CoreResult<&'v Value> {
    values
        .ok_or(CoreError::InvalidInput("missing argument"))?
        .require(name)
}

fn render_value(value: &Value) -> CoreResult<Node> {
    match value {
        Value::Str(text) => Ok(Node::text(text.as_str())),
        Value::Num(number) => Ok(Node::text(format_number(*number))),
        Value::Bool(flag) => Ok(Node::text(flag.to_string())),
        Value::DateTime(timestamp) => Ok(Node::text(timestamp.to_string())),
        Value::Element(node) => Ok(node.as_ref().clone()),
        Value::RichText(_) => Err(CoreError::InvalidInput(
            "rich text function used as a plain argument",
        )),
        Value::Any(_) => Err(CoreError::Unsupported("formatting for opaque values")),
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn push_node(out: &mut Vec<Node>, node: Node) {
    if let (Node::Text(text), Some(Node::Text(last))) = (&node, out.last_mut()) {
        last.push_str(text);
        return;
    }
    out.push(node);
}

fn collapse(mut nodes: Vec<Node>) -> Formatted {
    match nodes.len() {
        0 => Formatted::Single(Node::text("")),
        1 if nodes[0].is_text() => Formatted::Single(nodes.remove(0)),
        _ => Formatted::Sequence(nodes),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{Intl, format_number};
    use crate::catalog::Catalog;
    use crate::config::IntlConfig;
    use crate::error::RuntimeError;
    use intl_message_core::{
        CoreError, ElementType, FormatOptions, Formatted, Key, MessageDescriptor,
        MessageFormatter, Node, Value, Values,
    };

    fn intl_with(id: &str, template: &str) -> Intl {
        let mut catalog = Catalog::new();
        catalog.insert(Key::new(id).expect("key"), template);
        Intl::new(IntlConfig::default(), catalog)
    }

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("intl_message_{name}_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn bold() -> Value {
        Value::rich_text(|children| Node::element(ElementType::named("b"), children))
    }

    #[test]
    fn catalog_entry_wins_over_default_message() {
        let intl = intl_with("greet", "Bonjour, {name} !");
        let descriptor = MessageDescriptor::new("greet").with_default_message("Hello, {name}!");
        let values = Values::new().with("name", "Ana");
        let out = intl
            .format_message(&descriptor, Some(&values), &FormatOptions::default())
            .expect("format");
        assert_eq!(out, Formatted::Single(Node::text("Bonjour, Ana !")));
    }

    #[test]
    fn falls_back_to_id_without_default_message() {
        let intl = Intl::new(IntlConfig::default(), Catalog::new());
        let descriptor = MessageDescriptor::new("home.title");
        let out = intl.format_to_string(&descriptor, None).expect("format");
        assert_eq!(out, "home.title");
    }

    #[test]
    fn rejects_empty_id() {
        let intl = Intl::new(IntlConfig::default(), Catalog::new());
        let descriptor = MessageDescriptor::new("").with_default_message("x");
        let err = intl.format_to_string(&descriptor, None).expect_err("empty id");
        assert_eq!(err, CoreError::InvalidInput("message id is empty"));
    }

    #[test]
    fn rich_text_tags_call_value_functions() {
        let intl = intl_with("hi", "Hi <b>{name}</b>!");
        let values = Values::new().with("name", "Ana").with("b", bold());
        let out = intl
            .format_message(
                &MessageDescriptor::new("hi"),
                Some(&values),
                &FormatOptions::default(),
            )
            .expect("format");
        assert_eq!(
            out,
            Formatted::Sequence(vec![
                Node::text("Hi "),
                Node::element(ElementType::named("b"), vec![Node::text("Ana")]),
                Node::text("!"),
            ])
        );
    }

    #[test]
    fn ignore_tag_renders_markup_literally() {
        let intl = intl_with("hi", "Hi <b>{name}</b>");
        let values = Values::new().with("name", "Ana");
        let out = intl
            .format_message(
                &MessageDescriptor::new("hi"),
                Some(&values),
                &FormatOptions { ignore_tag: true },
            )
            .expect("format");
        assert_eq!(out, Formatted::Single(Node::text("Hi <b>Ana</b>")));
    }

    #[test]
    fn element_values_are_inserted_as_nodes() {
        let intl = intl_with("icon", "Save {icon}");
        let icon = Node::element(ElementType::named("svg"), vec![]);
        let values = Values::new().with("icon", icon.clone());
        let out = intl
            .format_message(
                &MessageDescriptor::new("icon"),
                Some(&values),
                &FormatOptions::default(),
            )
            .expect("format");
        assert_eq!(out, Formatted::Sequence(vec![Node::text("Save "), icon]));
    }

    #[test]
    fn missing_argument_is_reported() {
        let intl = intl_with("greet", "Hello, {name}!");
        let err = intl
            .format_to_string(&MessageDescriptor::new("greet"), None)
            .expect_err("missing");
        assert_eq!(err, CoreError::InvalidInput("missing argument"));
    }

    #[test]
    fn tag_without_function_is_reported() {
        let intl = intl_with("hi", "Hi <b>{name}</b>");
        let values = Values::new().with("name", "Ana").with("b", "bold");
        let err = intl
            .format_to_string(&MessageDescriptor::new("hi"), Some(&values))
            .expect_err("not a function");
        let expected = "value for <b> must be a rich text function, got string";
        assert_eq!(err, CoreError::Format(expected.to_string()));
    }

    #[test]
    fn opaque_values_are_not_coerced() {
        let intl = intl_with("v", "{v}");
        let values = Values::new().with("v", Value::Any(std::sync::Arc::new(5u8)));
        let err = intl
            .format_to_string(&MessageDescriptor::new("v"), Some(&values))
            .expect_err("opaque");
        assert_eq!(err, CoreError::Unsupported("formatting for opaque values"));
    }

    #[test]
    fn malformed_template_is_reported() {
        let intl = intl_with("bad", "x <b>y");
        let err = intl
            .format_to_string(&MessageDescriptor::new("bad"), None)
            .expect_err("malformed");
        assert_eq!(
            err,
            CoreError::Format("bad: unclosed tag <b> at offset 2".to_string())
        );
    }

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn text_component_follows_config() {
        let mut config = IntlConfig::default();
        config.text_component = "span".to_string();
        let intl = Intl::new(config, Catalog::new());
        assert_eq!(intl.text_component(), Some(ElementType::named("span")));
    }

    #[test]
    fn from_config_reads_messages_path() {
        let root = temp_dir("from_config");
        let messages = root.join("en.json");
        fs::write(&messages, r#"{"greet": "Hello, {name}!"}"#).expect("write catalog");
        let config = IntlConfig {
            messages_path: Some(messages.to_string_lossy().into_owned()),
            ..IntlConfig::default()
        };

        let intl = Intl::from_config(config).expect("intl");
        assert_eq!(intl.catalog().get("greet"), Some("Hello, {name}!"));
        let values = Values::new().with("name", "Ana");
        let out = intl
            .format_to_string(&MessageDescriptor::new("greet"), Some(&values))
            .expect("format");
        assert_eq!(out, "Hello, Ana!");

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn from_config_without_messages_path_has_empty_catalog() {
        let intl = Intl::from_config(IntlConfig::default()).expect("intl");
        assert!(intl.catalog().is_empty());
    }

    #[test]
    fn load_reports_missing_catalog_file() {
        let root = temp_dir("missing_catalog");
        let config_path = root.join("intl.toml");
        fs::write(&config_path, r#"messages_path = "messages/absent.json""#)
            .expect("write config");

        let err = Intl::load(&config_path).expect_err("missing catalog");
        assert!(matches!(err, RuntimeError::Io(_)));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn default_locale_match_ignores_ascii_case() {
        let config = IntlConfig {
            locale: "en-US".to_string(),
            default_locale: "en-us".to_string(),
            ..IntlConfig::default()
        };
        let intl = Intl::new(config, Catalog::new());
        assert!(intl.uses_default_locale());

        let config = IntlConfig {
            locale: "fr".to_string(),
            ..IntlConfig::default()
        };
        assert!(!Intl::new(config, Catalog::new()).uses_default_locale());
    }
}
