use intl_message_core::ElementType;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntlConfig {
    pub locale: String,
    pub default_locale: String,
    pub text_component: String,
    pub messages_path: Option<String>,
}

impl Default for IntlConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_locale: "en".to_string(),
            text_component: "fragment".to_string(),
            messages_path: None,
        }
    }
}

impl IntlConfig {
    pub fn text_component(&self) -> Option<ElementType> {
        match self.text_component.trim() {
            "" | "none" => None,
            "fragment" => Some(ElementType::Fragment),
            name => Some(ElementType::named(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IntlConfig;
    use intl_message_core::ElementType;

    #[test]
    fn default_values_are_stable() {
        let config = IntlConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.text_component(), Some(ElementType::Fragment));
        assert!(config.messages_path.is_none());
    }

    #[test]
    fn text_component_maps_names() {
        let mut config = IntlConfig::default();
        config.text_component = "none".to_string();
        assert_eq!(config.text_component(), None);
        config.text_component = "span".to_string();
        assert_eq!(config.text_component(), Some(ElementType::named("span")));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: IntlConfig = toml::from_str(r#"locale = "fr""#).expect("config");
        assert_eq!(config.locale, "fr");
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.text_component, "fragment");
    }
}
