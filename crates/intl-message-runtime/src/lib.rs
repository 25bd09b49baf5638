#![forbid(unsafe_code)]

mod catalog;
mod config;
mod error;
mod intl;
mod loader;
mod template;

pub use crate::catalog::Catalog;
pub use crate::config::IntlConfig;
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::intl::Intl;
pub use crate::loader::{load_catalog, load_config, load_config_or_default};
pub use crate::template::{Part, TemplateError, parse_template};
