/// Block, column, and section identifiers are opaque strings minted by the editor.
pub type ElementId = String;
