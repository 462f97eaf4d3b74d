//! Block kinds and their typed payloads.
//!
//! On the wire a block is `{ id, type, colSpan?, rowIndex?, visible?, data }`
//! where the shape of `data` depends on `type`. Here the `type`/`data` pair
//! is folded into [`BlockData`], one variant per kind, so consumers match
//! exhaustively instead of probing fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::ElementId;

// ---------------------------------------------------------------------------
// BlockKind
// ---------------------------------------------------------------------------

/// The closed set of block kinds the editor can author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Text,
    Image,
    Button,
    Cards,
    Form,
    Hero,
    Pills,
    Span,
    #[serde(rename = "buttonGroup")]
    ButtonGroup,
    RecentPosts,
    SocialLinks,
    WhatsappCta,
    ContactInfo,
    Services,
    Cta,
    MediaText,
}

impl BlockKind {
    /// Every kind, in editor palette order.
    pub const ALL: [BlockKind; 16] = [
        Self::Text,
        Self::Image,
        Self::Button,
        Self::Cards,
        Self::Form,
        Self::Hero,
        Self::Pills,
        Self::Span,
        Self::ButtonGroup,
        Self::RecentPosts,
        Self::SocialLinks,
        Self::WhatsappCta,
        Self::ContactInfo,
        Self::Services,
        Self::Cta,
        Self::MediaText,
    ];

    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
            Self::Cards => "cards",
            Self::Form => "form",
            Self::Hero => "hero",
            Self::Pills => "pills",
            Self::Span => "span",
            Self::ButtonGroup => "buttonGroup",
            Self::RecentPosts => "recent-posts",
            Self::SocialLinks => "social-links",
            Self::WhatsappCta => "whatsapp-cta",
            Self::ContactInfo => "contact-info",
            Self::Services => "services",
            Self::Cta => "cta",
            Self::MediaText => "media-text",
        }
    }

    /// Parse from a wire-format string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid block type: '{s}'")))
    }

    /// Kinds that always occupy the full width of their section, whatever
    /// `colSpan` says.
    pub fn is_full_width(&self) -> bool {
        matches!(self, Self::Hero | Self::RecentPosts | Self::Services)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payloads
//
// Every record keeps the keys it does not model in `extra`, so a block
// written back out carries its `data` unchanged.
// ---------------------------------------------------------------------------

/// Horizontal alignment shared by several text-bearing payloads.
///
/// Values this model does not know are carried through as `Other` so an
/// editor-side addition never makes a block undecodable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Other(String),
}

impl Align {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Align {
    fn from(s: String) -> Self {
        match s.as_str() {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Other(s),
        }
    }
}

impl From<Align> for String {
    fn from(value: Align) -> Self {
        match value {
            Align::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextData {
    /// Rich-text HTML. Sanitised by the renderer, never here.
    pub html: String,
    pub align: Align,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Focal-point crop, in percent of the source image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageCrop {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<ImageCrop>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonData {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub open_in_new_tab: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardsData {
    pub items: Vec<Card>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input widgets a form block can render.
///
/// Values this model does not know are carried through as `Other` so an
/// editor-side addition never makes a block undecodable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormFieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    Select,
    Checkbox,
    Other(String),
}

impl FormFieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for FormFieldKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            _ => Self::Other(s),
        }
    }
}

impl From<FormFieldKind> for String {
    fn from(value: FormFieldKind) -> Self {
        match value {
            FormFieldKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FormFieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<ButtonData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PillsData {
    pub items: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpanData {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonGroupData {
    pub buttons: Vec<ButtonData>,
    pub align: Align,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentPostsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinksData {
    pub links: Vec<SocialLink>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhatsappCtaData {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<ServiceItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which side of a media-text block the media sits on.
///
/// Values this model does not know are carried through as `Other` so an
/// editor-side addition never makes a block undecodable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaPosition {
    #[default]
    Left,
    Right,
    Other(String),
}

impl MediaPosition {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for MediaPosition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Other(s),
        }
    }
}

impl From<MediaPosition> for String {
    fn from(value: MediaPosition) -> Self {
        match value {
            MediaPosition::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaTextData {
    pub media: ImageData,
    pub html: String,
    pub media_position: MediaPosition,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// BlockData
// ---------------------------------------------------------------------------

/// A block's payload, tagged by kind.
///
/// Serializes as the bare payload; the kind travels separately as the
/// block's `type` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockData {
    Text(TextData),
    Image(ImageData),
    Button(ButtonData),
    Cards(CardsData),
    Form(FormData),
    Hero(HeroData),
    Pills(PillsData),
    Span(SpanData),
    ButtonGroup(ButtonGroupData),
    RecentPosts(RecentPostsData),
    SocialLinks(SocialLinksData),
    WhatsappCta(WhatsappCtaData),
    ContactInfo(ContactInfoData),
    Services(ServicesData),
    Cta(CtaData),
    MediaText(MediaTextData),
}

impl BlockData {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text(_) => BlockKind::Text,
            Self::Image(_) => BlockKind::Image,
            Self::Button(_) => BlockKind::Button,
            Self::Cards(_) => BlockKind::Cards,
            Self::Form(_) => BlockKind::Form,
            Self::Hero(_) => BlockKind::Hero,
            Self::Pills(_) => BlockKind::Pills,
            Self::Span(_) => BlockKind::Span,
            Self::ButtonGroup(_) => BlockKind::ButtonGroup,
            Self::RecentPosts(_) => BlockKind::RecentPosts,
            Self::SocialLinks(_) => BlockKind::SocialLinks,
            Self::WhatsappCta(_) => BlockKind::WhatsappCta,
            Self::ContactInfo(_) => BlockKind::ContactInfo,
            Self::Services(_) => BlockKind::Services,
            Self::Cta(_) => BlockKind::Cta,
            Self::MediaText(_) => BlockKind::MediaText,
        }
    }

    /// Decode the raw `data` value of a block whose `type` is `kind`.
    ///
    /// A missing or `null` payload decodes to the kind's empty payload.
    pub fn from_value(kind: BlockKind, data: Value) -> Result<Self, serde_json::Error> {
        let data = if data.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            data
        };

        Ok(match kind {
            BlockKind::Text => Self::Text(serde_json::from_value(data)?),
            BlockKind::Image => Self::Image(serde_json::from_value(data)?),
            BlockKind::Button => Self::Button(serde_json::from_value(data)?),
            BlockKind::Cards => Self::Cards(serde_json::from_value(data)?),
            BlockKind::Form => Self::Form(serde_json::from_value(data)?),
            BlockKind::Hero => Self::Hero(serde_json::from_value(data)?),
            BlockKind::Pills => Self::Pills(serde_json::from_value(data)?),
            BlockKind::Span => Self::Span(serde_json::from_value(data)?),
            BlockKind::ButtonGroup => Self::ButtonGroup(serde_json::from_value(data)?),
            BlockKind::RecentPosts => Self::RecentPosts(serde_json::from_value(data)?),
            BlockKind::SocialLinks => Self::SocialLinks(serde_json::from_value(data)?),
            BlockKind::WhatsappCta => Self::WhatsappCta(serde_json::from_value(data)?),
            BlockKind::ContactInfo => Self::ContactInfo(serde_json::from_value(data)?),
            BlockKind::Services => Self::Services(serde_json::from_value(data)?),
            BlockKind::Cta => Self::Cta(serde_json::from_value(data)?),
            BlockKind::MediaText => Self::MediaText(serde_json::from_value(data)?),
        })
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// Highest explicit `rowIndex` the organizer honours. The grid is as tall
/// as the largest row index, so anything above this falls back to the
/// block's position.
pub const MAX_ROW_INDEX: usize = 999;

/// A single content unit placed in a section column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    pub id: ElementId,
    /// Requested column span as authored. Saturated by
    /// [`calculate_span`](super::span::calculate_span), never rejected.
    pub col_span: Option<i64>,
    /// Authored row index. Negative values and values above
    /// [`MAX_ROW_INDEX`] are kept so the validator can report them, but the
    /// organizer ignores them.
    pub row_index: Option<i64>,
    pub visible: bool,
    pub data: BlockData,
}

impl Block {
    /// Build a visible block with no span or row annotations.
    pub fn new(id: impl Into<ElementId>, data: BlockData) -> Self {
        Self {
            id: id.into(),
            col_span: None,
            row_index: None,
            visible: true,
            data,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.data.kind()
    }

    /// The authored row index, if it is usable (`0..=MAX_ROW_INDEX`).
    pub fn explicit_row_index(&self) -> Option<usize> {
        self.row_index
            .and_then(|r| usize::try_from(r).ok())
            .filter(|&r| r <= MAX_ROW_INDEX)
    }
}

/// Wire shape of a block before its payload is decoded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    id: ElementId,
    #[serde(rename = "type")]
    kind: BlockKind,
    #[serde(default, deserialize_with = "lenient_integer")]
    col_span: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    row_index: Option<i64>,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawBlock> for Block {
    type Error = serde_json::Error;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            col_span: raw.col_span,
            row_index: raw.row_index,
            visible: raw.visible.unwrap_or(true),
            data: BlockData::from_value(raw.kind, raw.data)?,
        })
    }
}

/// Borrowed wire shape used when writing a block back out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockRef<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    col_span: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    row_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,
    data: &'a BlockData,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BlockRef {
            id: &self.id,
            kind: self.kind(),
            col_span: self.col_span,
            row_index: self.row_index,
            visible: (!self.visible).then_some(false),
            data: &self.data,
        }
        .serialize(serializer)
    }
}

/// Accept any JSON value and keep it only if it is an integer.
///
/// Integral floats such as `2.0` are kept. Strings (`"2"`), fractions,
/// booleans and `null` are ignored and read as absent.
fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    // -- BlockKind ----------------------------------------------------------

    #[test]
    fn kind_wire_names_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_str(kind.as_str()).unwrap(), kind);
            let encoded = serde_json::to_value(kind).unwrap();
            assert_eq!(encoded, json!(kind.as_str()));
        }
    }

    #[test]
    fn mixed_case_wire_names() {
        assert_eq!(BlockKind::ButtonGroup.as_str(), "buttonGroup");
        assert_eq!(BlockKind::RecentPosts.as_str(), "recent-posts");
        assert_eq!(BlockKind::MediaText.to_string(), "media-text");
    }

    #[test]
    fn unknown_kind_rejected() {
        assert_matches!(BlockKind::from_str("carousel"), Err(CoreError::Validation(_)));
        assert!(BlockKind::from_str("").is_err());
    }

    #[test]
    fn full_width_kinds() {
        let full: Vec<_> = BlockKind::ALL
            .into_iter()
            .filter(BlockKind::is_full_width)
            .collect();
        assert_eq!(
            full,
            vec![BlockKind::Hero, BlockKind::RecentPosts, BlockKind::Services]
        );
    }

    // -- Block decoding -----------------------------------------------------

    #[test]
    fn decodes_typed_payload() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "type": "button",
            "colSpan": 2,
            "rowIndex": 1,
            "data": { "label": "Book a call", "href": "/contact", "openInNewTab": true }
        }))
        .unwrap();

        assert_eq!(block.id, "b1");
        assert_eq!(block.col_span, Some(2));
        assert_eq!(block.explicit_row_index(), Some(1));
        assert!(block.visible);
        assert_matches!(
            block.data,
            BlockData::Button(ButtonData { ref label, open_in_new_tab: true, .. }) if label == "Book a call"
        );
    }

    #[test]
    fn missing_data_decodes_to_empty_payload() {
        let block: Block = serde_json::from_value(json!({ "id": "h", "type": "hero" })).unwrap();
        assert_eq!(block.data, BlockData::Hero(HeroData::default()));
        assert_eq!(block.kind(), BlockKind::Hero);
    }

    #[test]
    fn form_fields_decode() {
        let block: Block = serde_json::from_value(json!({
            "id": "f",
            "type": "form",
            "data": {
                "submitLabel": "Send",
                "fields": [
                    { "name": "email", "label": "Email", "type": "email", "required": true },
                    { "name": "topic", "label": "Topic", "type": "select", "options": ["a", "b"] }
                ]
            }
        }))
        .unwrap();

        let BlockData::Form(form) = block.data else {
            panic!("expected form payload");
        };
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[0].kind, FormFieldKind::Email);
        assert!(form.fields[0].required);
        assert_eq!(form.fields[1].options, vec!["a", "b"]);
    }

    #[test]
    fn lenient_row_index_and_span() {
        let block: Block = serde_json::from_value(json!({
            "id": "t", "type": "text", "rowIndex": "2", "colSpan": 2.0
        }))
        .unwrap();
        assert_eq!(block.row_index, None);
        assert_eq!(block.col_span, Some(2));

        let block: Block = serde_json::from_value(json!({
            "id": "t", "type": "text", "rowIndex": 1.5, "colSpan": null
        }))
        .unwrap();
        assert_eq!(block.row_index, None);
        assert_eq!(block.col_span, None);
    }

    #[test]
    fn negative_row_index_is_not_explicit() {
        let block: Block =
            serde_json::from_value(json!({ "id": "t", "type": "text", "rowIndex": -1 })).unwrap();
        assert_eq!(block.row_index, Some(-1));
        assert_eq!(block.explicit_row_index(), None);
    }

    #[test]
    fn oversized_row_index_is_not_explicit() {
        let at_limit: Block = serde_json::from_value(json!({
            "id": "t", "type": "text", "rowIndex": MAX_ROW_INDEX
        }))
        .unwrap();
        assert_eq!(at_limit.explicit_row_index(), Some(MAX_ROW_INDEX));

        for huge in [MAX_ROW_INDEX as i64 + 1, 5_000_000, i64::MAX] {
            let block: Block = serde_json::from_value(json!({
                "id": "t", "type": "text", "rowIndex": huge
            }))
            .unwrap();
            assert_eq!(block.row_index, Some(huge));
            assert_eq!(block.explicit_row_index(), None);
        }
    }

    #[test]
    fn unknown_type_fails_to_decode() {
        let result: Result<Block, _> =
            serde_json::from_value(json!({ "id": "x", "type": "carousel", "data": {} }));
        assert!(result.is_err());
    }

    // -- Block encoding -----------------------------------------------------

    #[test]
    fn encodes_wire_shape() {
        let mut block = Block::new(
            "s1",
            BlockData::Span(SpanData {
                text: "New".to_string(),
                ..SpanData::default()
            }),
        );
        block.row_index = Some(3);

        let encoded = serde_json::to_value(&block).unwrap();
        assert_eq!(
            encoded,
            json!({ "id": "s1", "type": "span", "rowIndex": 3, "data": { "text": "New" } })
        );
    }

    #[test]
    fn hidden_flag_written_only_when_false() {
        let mut block = Block::new("p", BlockData::Pills(PillsData::default()));
        block.visible = false;
        let encoded = serde_json::to_value(&block).unwrap();
        assert_eq!(encoded["visible"], json!(false));

        block.visible = true;
        let encoded = serde_json::to_value(&block).unwrap();
        assert!(encoded.get("visible").is_none());
    }

    // -- Payload preservation -----------------------------------------------

    #[test]
    fn unknown_payload_keys_survive_round_trip() {
        let raw = json!({
            "id": "img",
            "type": "image",
            "data": { "alt": "a", "rounded": true, "src": "/a.png", "width": "50%" }
        });
        let block: Block = serde_json::from_value(raw.clone()).unwrap();

        let BlockData::Image(ref image) = block.data else {
            panic!("expected image payload");
        };
        assert_eq!(image.extra.get("rounded"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn nested_unknown_keys_survive_round_trip() {
        let raw = json!({
            "id": "hero",
            "type": "hero",
            "data": {
                "title": "Welcome",
                "overlay": 0.4,
                "backgroundImage": { "src": "/bg.jpg", "alt": "", "focus": "top" },
                "cta": { "label": "Go", "href": "/", "openInNewTab": false, "icon": "arrow" }
            }
        });
        let block: Block = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn unknown_form_field_type_is_kept() {
        let raw = json!({
            "id": "f",
            "type": "form",
            "data": {
                "submitLabel": "Send",
                "fields": [{ "name": "when", "label": "Date", "type": "date", "required": false }]
            }
        });
        let block: Block = serde_json::from_value(raw.clone()).unwrap();

        let BlockData::Form(ref form) = block.data else {
            panic!("expected form payload");
        };
        assert_eq!(form.fields[0].kind, FormFieldKind::Other("date".to_string()));
        assert_eq!(form.fields[0].kind.as_str(), "date");
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn unknown_alignment_and_media_position_are_kept() {
        let text: Block = serde_json::from_value(json!({
            "id": "t", "type": "text", "data": { "html": "", "align": "justify" }
        }))
        .unwrap();
        assert_matches!(text.data, BlockData::Text(TextData { align: Align::Other(ref a), .. }) if a == "justify");

        let media: Block = serde_json::from_value(json!({
            "id": "m", "type": "media-text", "data": { "mediaPosition": "top" }
        }))
        .unwrap();
        let encoded = serde_json::to_value(&media).unwrap();
        assert_eq!(encoded["data"]["mediaPosition"], "top");
    }

    #[test]
    fn known_enum_values_decode_to_variants() {
        assert_eq!(Align::from("center".to_string()), Align::Center);
        assert_eq!(MediaPosition::from("right".to_string()), MediaPosition::Right);
        assert_eq!(String::from(FormFieldKind::Textarea), "textarea");
    }
}
