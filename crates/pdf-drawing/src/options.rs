use crate::constants::{DEFAULT_PDF_VERSION, SUPPORTED_PDF_VERSIONS};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output document configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Written to the document information dictionary
    pub title: Option<String>,
    pub pdf_version: String,
    /// Flate-compress content streams before saving
    pub compress: bool,
    /// Render page content streams concurrently (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            pdf_version: DEFAULT_PDF_VERSION.to_string(),
            compress: true,
            parallel: false,
        }
    }
}

impl RenderOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RenderError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RenderError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_PDF_VERSIONS.contains(&self.pdf_version.as_str()) {
            return Err(RenderError::Config(format!(
                "Unsupported PDF version {}, expected one of {}",
                self.pdf_version,
                SUPPORTED_PDF_VERSIONS.join(", ")
            )));
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(RenderError::Config(
                    "Title must not be blank when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
