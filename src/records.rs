//! Typed record schemas, one per category.
//!
//! Positions are 1-based indexes of discovery in document order. Attribute
//! values that are absent read as empty strings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;

/// A heading (`h1`..`h6`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleRecord {
    /// `H1`..`H6`.
    pub level: String,
    pub text: String,
    pub position: usize,
    pub id: String,
    pub class: String,
}

/// Kind of text block a description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DescriptionKind {
    #[serde(rename = "Meta Description")]
    MetaDescription,
    Paragraph,
}

impl DescriptionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DescriptionKind::MetaDescription => "Meta Description",
            DescriptionKind::Paragraph => "Paragraph",
        }
    }
}

/// The meta description or a paragraph.
///
/// The meta description always has position 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionRecord {
    #[serde(rename = "type")]
    pub kind: DescriptionKind,
    pub text: String,
    /// Character count of `text`.
    pub length: usize,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub position: usize,
    pub url: String,
    pub alt: String,
    pub title: String,
    pub width: String,
    pub height: String,
    pub loading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub position: usize,
    pub url: String,
    pub text: String,
    pub title: String,
    pub is_external: bool,
    pub rel: String,
    pub target: String,
}

/// One `<table>` with its header and non-empty data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRecord {
    /// Index of the `<table>` among all tables in the document.
    pub table_number: usize,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    pub column_count: usize,
}

/// Aggregate contact data for the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub total_contacts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRecord {
    /// The price as written on the page.
    pub price: String,
    /// Numeric value without currency or thousands separators.
    pub amount: String,
    /// Surrounding text, or "General page content" for page-wide matches.
    pub context: String,
}

/// How a video is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Video,
    Iframe,
}

impl VideoKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VideoKind::Video => "video",
            VideoKind::Iframe => "iframe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: VideoKind,
    pub src: String,
    /// `<video poster>`; empty for iframes.
    pub poster: String,
    /// `<iframe title>`; empty for video tags.
    pub title: String,
    pub width: String,
    pub height: String,
}

/// Tag a form control was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldElement {
    Input,
    Textarea,
    Select,
    Button,
}

impl FieldElement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldElement::Input => "input",
            FieldElement::Textarea => "textarea",
            FieldElement::Select => "select",
            FieldElement::Button => "button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
    pub disabled: bool,
}

/// One form control.
///
/// Attributes that do not apply to the control's element type stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub position: usize,
    pub element_type: FieldElement,
    /// `type` attribute for inputs and buttons; element name otherwise.
    pub input_type: String,
    pub name: String,
    pub id: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub hidden: bool,
    pub checked: bool,
    pub multiple: bool,
    pub min: String,
    pub max: String,
    pub maxlength: String,
    pub pattern: String,
    pub rows: String,
    pub cols: String,
    pub size: String,
    pub options: Vec<SelectOption>,
    pub class: String,
    pub aria_label: String,
    /// Button text.
    pub text: String,
    pub data_attributes: BTreeMap<String, String>,
}

impl FormField {
    /// Option count for selects, `None` for other controls.
    #[must_use]
    pub fn options_count(&self) -> Option<usize> {
        (self.element_type == FieldElement::Select).then_some(self.options.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRecord {
    pub form_number: usize,
    pub form_id: String,
    pub form_name: String,
    pub form_class: String,
    pub action: String,
    pub method: String,
    pub enctype: String,
    pub autocomplete: String,
    pub target: String,
    pub fields: Vec<FormField>,
    pub total_fields: usize,
    pub hidden_fields: usize,
    pub required_fields: usize,
    pub disabled_fields: usize,
}

impl FormRecord {
    /// Attach fields and derive the per-form counts from them.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FormField>) -> Self {
        self.total_fields = fields.len();
        self.hidden_fields = fields.iter().filter(|f| f.hidden).count();
        self.required_fields = fields.iter().filter(|f| f.required).count();
        self.disabled_fields = fields.iter().filter(|f| f.disabled).count();
        self.fields = fields;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRecord {
    pub position: usize,
    pub name: String,
    pub property: String,
    pub content: String,
    pub http_equiv: String,
}

/// Records of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryData {
    Titles(Vec<TitleRecord>),
    Descriptions(Vec<DescriptionRecord>),
    Images(Vec<ImageRecord>),
    Links(Vec<LinkRecord>),
    Tables(Vec<TableRecord>),
    Contact(ContactInfo),
    Prices(Vec<PriceRecord>),
    Videos(Vec<VideoRecord>),
    Forms(Vec<FormRecord>),
    Meta(Vec<MetaRecord>),
}

impl CategoryData {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            CategoryData::Titles(_) => Category::Titles,
            CategoryData::Descriptions(_) => Category::Descriptions,
            CategoryData::Images(_) => Category::Images,
            CategoryData::Links(_) => Category::Links,
            CategoryData::Tables(_) => Category::Tables,
            CategoryData::Contact(_) => Category::Contact,
            CategoryData::Prices(_) => Category::Prices,
            CategoryData::Videos(_) => Category::Videos,
            CategoryData::Forms(_) => Category::Forms,
            CategoryData::Meta(_) => Category::Meta,
        }
    }

    /// Number of extracted items; contact counts addresses plus numbers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            CategoryData::Titles(v) => v.len(),
            CategoryData::Descriptions(v) => v.len(),
            CategoryData::Images(v) => v.len(),
            CategoryData::Links(v) => v.len(),
            CategoryData::Tables(v) => v.len(),
            CategoryData::Contact(c) => c.emails.len() + c.phones.len(),
            CategoryData::Prices(v) => v.len(),
            CategoryData::Videos(v) => v.len(),
            CategoryData::Forms(v) => v.len(),
            CategoryData::Meta(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
