use crate::constants::{DEFAULT_OUTPUT_NAME, PDF_EXTENSION};
use crate::types::*;
use std::path::{Component, Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion settings chosen before a run starts
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Output file name; `.pdf` is appended when missing
    pub output_name: String,
    pub page_size: PageSize,
    pub placement: Placement,
    /// Optional document title written to the PDF metadata
    pub title: Option<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            page_size: PageSize::A4,
            placement: Placement::Center,
            title: None,
        }
    }
}

impl ConversionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Path of the PDF this run will write.
    ///
    /// An empty name becomes `output.pdf`. A name that already ends in
    /// `.pdf` is used as is.
    pub fn output_path(&self) -> PathBuf {
        let name = self.output_name.trim();
        if name.is_empty() {
            return PathBuf::from(format!("{DEFAULT_OUTPUT_NAME}.{PDF_EXTENSION}"));
        }

        let has_pdf_extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION));

        if has_pdf_extension {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{name}.{PDF_EXTENSION}"))
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let name = self.output_name.trim();
        if name.is_empty() {
            return Ok(());
        }

        // Path components drop a trailing separator, so check for it first
        let names_directory = name.ends_with('/') || name.ends_with(std::path::MAIN_SEPARATOR);
        match Path::new(name).components().next_back() {
            Some(Component::Normal(_)) if !names_directory => Ok(()),
            _ => Err(ConvertError::Config(format!(
                "Output name '{}' does not name a file",
                self.output_name
            ))),
        }
    }
}
