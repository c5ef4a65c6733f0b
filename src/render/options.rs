//! Layout options and configuration.

use crate::error::{Error, Result};
use crate::layout::{str_width, ColumnTiers, TableGeometry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder emitted in place of a table that could not be rendered.
pub const DEFAULT_TABLE_FAILURE_PLACEHOLDER: &str = "[table rendering failed]";

/// Widest column the top tier may produce.
pub const MAX_COLUMN_WIDTH: u32 = 4096;

/// Options controlling paragraph wrapping and table geometry.
///
/// Every field has a default, so a JSON configuration file only needs to
/// name the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Maximum display width of wrapped paragraph lines, indent included
    pub text_width: u32,

    /// Prefix for every wrapped paragraph line
    pub text_indent: String,

    /// Character repeated once per heading level
    pub heading_prefix: char,

    /// Width of the first column tier
    pub base_column_width: u32,

    /// Multiplier of the second column tier
    pub level_2_multiplier: u32,

    /// Multiplier of the third column tier
    pub level_3_multiplier: u32,

    /// Total horizontal padding inside a table cell
    pub cell_padding: u32,

    /// Spaces before the text of a table cell line
    pub cell_left_padding: u32,

    /// Line emitted instead of a table that failed to render
    pub table_failure_placeholder: String,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph wrap width.
    pub fn with_text_width(mut self, width: u32) -> Self {
        self.text_width = width;
        self
    }

    /// Set the paragraph indent.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.text_indent = indent.into();
        self
    }

    /// Set the heading marker character.
    pub fn with_heading_prefix(mut self, prefix: char) -> Self {
        self.heading_prefix = prefix;
        self
    }

    /// Set the base column width.
    pub fn with_base_column_width(mut self, width: u32) -> Self {
        self.base_column_width = width;
        self
    }

    /// Set the second and third tier multipliers.
    pub fn with_tier_multipliers(mut self, level_2: u32, level_3: u32) -> Self {
        self.level_2_multiplier = level_2;
        self.level_3_multiplier = level_3;
        self
    }

    /// Set the cell padding (total) and left padding.
    pub fn with_cell_padding(mut self, total: u32, left: u32) -> Self {
        self.cell_padding = total;
        self.cell_left_padding = left;
        self
    }

    /// Set the failed-table placeholder.
    pub fn with_table_failure_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.table_failure_placeholder = placeholder.into();
        self
    }

    /// Check that the options describe a drawable layout.
    pub fn validate(&self) -> Result<()> {
        if self.text_width == 0 {
            return Err(Error::InvalidOptions("text_width must be positive".into()));
        }
        let indent_width = str_width(&self.text_indent);
        if indent_width >= self.text_width {
            return Err(Error::InvalidOptions(format!(
                "text_indent is {} columns wide, text_width is only {}",
                indent_width, self.text_width
            )));
        }
        if self.base_column_width <= self.cell_padding {
            return Err(Error::InvalidOptions(format!(
                "base_column_width ({}) must exceed cell_padding ({})",
                self.base_column_width, self.cell_padding
            )));
        }
        if self.cell_left_padding > self.cell_padding {
            return Err(Error::InvalidOptions(format!(
                "cell_left_padding ({}) exceeds cell_padding ({})",
                self.cell_left_padding, self.cell_padding
            )));
        }
        if self.level_2_multiplier == 0 || self.level_3_multiplier < self.level_2_multiplier {
            return Err(Error::InvalidOptions(format!(
                "tier multipliers must satisfy 1 <= level_2 <= level_3, got {} and {}",
                self.level_2_multiplier, self.level_3_multiplier
            )));
        }
        let top_tier = self
            .base_column_width
            .checked_mul(self.level_3_multiplier)
            .filter(|&width| width <= MAX_COLUMN_WIDTH);
        if top_tier.is_none() {
            return Err(Error::InvalidOptions(format!(
                "top column tier {} x {} exceeds {} columns",
                self.base_column_width, self.level_3_multiplier, MAX_COLUMN_WIDTH
            )));
        }
        Ok(())
    }

    /// Column tiers described by these options.
    pub fn column_tiers(&self) -> ColumnTiers {
        ColumnTiers::new(
            self.base_column_width,
            self.level_2_multiplier,
            self.level_3_multiplier,
        )
    }

    /// Table geometry described by these options.
    pub fn table_geometry(&self) -> TableGeometry {
        TableGeometry {
            tiers: self.column_tiers(),
            cell_padding: self.cell_padding,
            cell_left_padding: self.cell_left_padding,
        }
    }

    /// Parse options from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Serialize options to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write options to a JSON file, creating parent directories.
    pub fn save_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_width: 80,
            text_indent: "    ".to_string(),
            heading_prefix: '#',
            base_column_width: 15,
            level_2_multiplier: 2,
            level_3_multiplier: 3,
            cell_padding: 2,
            cell_left_padding: 1,
            table_failure_placeholder: DEFAULT_TABLE_FAILURE_PLACEHOLDER.to_string(),
        }
    }
}
