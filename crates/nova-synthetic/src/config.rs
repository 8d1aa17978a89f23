//! Rendering configuration.
//!
//! ```toml
//! [render]
//! empty_body = "{ }"
//! render_annotations = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SyntheticError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Block appended to declarations that carry no explicit body.
    #[serde(default = "default_empty_body")]
    pub empty_body: String,
    /// Whether annotations are emitted into the rendered declaration text.
    #[serde(default = "default_render_annotations")]
    pub render_annotations: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_body: default_empty_body(),
            render_annotations: default_render_annotations(),
        }
    }
}

fn default_empty_body() -> String {
    "{  }".to_string()
}

fn default_render_annotations() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

impl RenderConfig {
    /// Parse the `[render]` table of a TOML document. A missing table yields the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SyntheticError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.render.validate()?;
        Ok(file.render)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SyntheticError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SyntheticError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        let body = self.empty_body.trim();
        if !(body.starts_with('{') && body.ends_with('}')) {
            return Err(SyntheticError::Config(format!(
                "`render.empty_body` must be a block delimited by braces, got `{}`",
                self.empty_body
            )));
        }
        Ok(())
    }
}
