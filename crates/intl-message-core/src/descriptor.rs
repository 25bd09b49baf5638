use alloc::string::String;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MessageDescriptor {
    pub id: String,
    pub description: Option<String>,
    pub default_message: Option<String>,
}

impl MessageDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            default_message: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_message(mut self, default_message: impl Into<String>) -> Self {
        self.default_message = Some(default_message.into());
        self
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }
}
