//! Sections and columns of a page layout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::block::Block;
use crate::types::ElementId;

/// An ordered list of blocks rendered as one vertical slot.
///
/// Block order matters: it is the fallback row ordering for blocks without
/// an explicit `rowIndex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ElementId,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Column {
    pub fn new(id: impl Into<ElementId>, blocks: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            blocks,
        }
    }

    /// Visible blocks paired with their position among visible blocks.
    pub fn visible_blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter().filter(|b| b.visible).enumerate()
    }
}

/// Presentation settings of a section.
///
/// Only `columnsLayout` feeds the grid; the rest is carried through for the
/// renderer. Keys this model does not know are kept in `extra` so a
/// document survives a decode/encode cycle intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns_layout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A horizontal slice of a page holding one to three columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_layout: Option<u32>,
    #[serde(default)]
    pub cols: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SectionSettings>,
}

impl Section {
    /// Build a section whose `columns` matches the number of given columns.
    pub fn new(id: impl Into<ElementId>, cols: Vec<Column>) -> Self {
        Self {
            id: id.into(),
            columns: u32::try_from(cols.len()).ok(),
            columns_layout: None,
            cols,
            settings: None,
        }
    }

    /// Every block in the section, hidden ones included, column by column.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.cols.iter().flat_map(|c| c.blocks.iter())
    }
}
