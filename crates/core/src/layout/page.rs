//! The versioned page layout document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::section::Section;
use crate::error::CoreError;

/// The only layout document version this crate understands.
pub const LAYOUT_VERSION: u32 = 2;

/// A page's layout: an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub version: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PageLayout {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            version: LAYOUT_VERSION,
            sections,
        }
    }

    /// Decode and check a layout document.
    ///
    /// Rejects unknown versions and pages that reuse a block id.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let layout: PageLayout = serde_json::from_str(json)?;
        layout.check()?;
        Ok(layout)
    }

    /// Same as [`PageLayout::from_json`] for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let layout: PageLayout = serde_json::from_value(value)?;
        layout.check()?;
        Ok(layout)
    }

    fn check(&self) -> Result<(), CoreError> {
        validate_version(self.version)?;

        let duplicates = self.duplicate_block_ids();
        if !duplicates.is_empty() {
            return Err(CoreError::Validation(format!(
                "Duplicate block ids: {}",
                duplicates.join(", ")
            )));
        }
        Ok(())
    }

    /// Every block on the page, section by section, column by column.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(Section::blocks)
    }

    /// Block ids that occur more than once, in first-repeat order.
    pub fn duplicate_block_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for block in self.blocks() {
            if !seen.insert(block.id.as_str()) && reported.insert(block.id.as_str()) {
                duplicates.push(block.id.clone());
            }
        }
        duplicates
    }
}

/// Validate that a document version is one this crate can organize.
pub fn validate_version(version: u32) -> Result<(), CoreError> {
    if version != LAYOUT_VERSION {
        return Err(CoreError::Validation(format!(
            "Unsupported layout version {version}, expected {LAYOUT_VERSION}"
        )));
    }
    Ok(())
}
