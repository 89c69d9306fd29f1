//! Flatten category records into named rectangular tables.
//!
//! Every table carries a display-order prefix in its name (`1_Metadata`,
//! `2_Titles`, ... `11_Meta_Tags`) and [`TableSet`] keeps them in that
//! order. Rows are always exactly as wide as the header.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::metadata::PageMetadata;
use crate::records::{
    CategoryData, ContactInfo, DescriptionRecord, FormField, FormRecord, ImageRecord, LinkRecord, MetaRecord,
    PriceRecord, TableRecord, TitleRecord, VideoRecord,
};

/// One rectangular table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl NamedTable {
    /// Build a table, padding short rows with empty cells and truncating
    /// long ones to the header width.
    #[must_use]
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    fn from_columns(name: impl Into<String>, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self::new(name, columns.iter().map(|c| (*c).to_string()).collect(), rows)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` under the header `column`.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// All cells under the header `column`, top to bottom.
    #[must_use]
    pub fn column(&self, column: &str) -> Option<Vec<&str>> {
        let col = self.headers.iter().position(|h| h == column)?;
        Some(self.rows.iter().map(|r| r[col].as_str()).collect())
    }
}

/// Named tables in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableSet(Vec<NamedTable>);

impl TableSet {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NamedTable> {
        self.0.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, NamedTable> {
        self.0.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(NamedTable::name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TableSet {
    type Item = NamedTable;
    type IntoIter = std::vec::IntoIter<NamedTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TableSet {
    type Item = &'a NamedTable;
    type IntoIter = std::slice::Iter<'a, NamedTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A record type that flattens to one table row.
pub trait TabularRecord {
    /// Header of the category table, in schema order.
    const COLUMNS: &'static [&'static str];

    /// Cell values in `COLUMNS` order.
    fn cells(&self) -> Vec<String>;
}

/// `True` / `False`, as used by the link table.
fn bool_cell(value: bool) -> String {
    (if value { "True" } else { "False" }).to_string()
}

/// `Yes` / `No`, as used by the form tables.
fn yes_no(value: bool) -> String {
    (if value { "Yes" } else { "No" }).to_string()
}

impl TabularRecord for TitleRecord {
    const COLUMNS: &'static [&'static str] = &["level", "text", "position", "id", "class"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.level.clone(),
            self.text.clone(),
            self.position.to_string(),
            self.id.clone(),
            self.class.clone(),
        ]
    }
}

impl TabularRecord for DescriptionRecord {
    const COLUMNS: &'static [&'static str] = &["type", "text", "length", "position"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.as_str().to_string(),
            self.text.clone(),
            self.length.to_string(),
            self.position.to_string(),
        ]
    }
}

impl TabularRecord for ImageRecord {
    const COLUMNS: &'static [&'static str] = &["position", "url", "alt", "title", "width", "height", "loading"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.url.clone(),
            self.alt.clone(),
            self.title.clone(),
            self.width.clone(),
            self.height.clone(),
            self.loading.clone(),
        ]
    }
}

impl TabularRecord for LinkRecord {
    const COLUMNS: &'static [&'static str] = &["position", "url", "text", "title", "is_external", "rel", "target"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.url.clone(),
            self.text.clone(),
            self.title.clone(),
            bool_cell(self.is_external),
            self.rel.clone(),
            self.target.clone(),
        ]
    }
}

impl TabularRecord for PriceRecord {
    const COLUMNS: &'static [&'static str] = &["price", "amount", "context"];

    fn cells(&self) -> Vec<String> {
        vec![self.price.clone(), self.amount.clone(), self.context.clone()]
    }
}

impl TabularRecord for VideoRecord {
    const COLUMNS: &'static [&'static str] = &["position", "type", "src", "poster", "title", "width", "height"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.kind.as_str().to_string(),
            self.src.clone(),
            self.poster.clone(),
            self.title.clone(),
            self.width.clone(),
            self.height.clone(),
        ]
    }
}

impl TabularRecord for MetaRecord {
    const COLUMNS: &'static [&'static str] = &["position", "name", "property", "content", "http_equiv"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.name.clone(),
            self.property.clone(),
            self.content.clone(),
            self.http_equiv.clone(),
        ]
    }
}

impl TabularRecord for FormField {
    const COLUMNS: &'static [&'static str] = &[
        "Position",
        "Element_Type",
        "Input_Type",
        "Name",
        "ID",
        "Label",
        "Value",
        "Placeholder",
        "Required",
        "Disabled",
        "Readonly",
        "Hidden",
        "Checked",
        "Min",
        "Max",
        "MaxLength",
        "Pattern",
        "Rows",
        "Cols",
        "Multiple",
        "Size",
        "Options_Count",
        "Class",
        "ARIA_Label",
        "Text",
        "Data_Attributes",
    ];

    fn cells(&self) -> Vec<String> {
        let data = serde_json::to_string(&self.data_attributes).unwrap_or_default();
        vec![
            self.position.to_string(),
            self.element_type.as_str().to_string(),
            self.input_type.clone(),
            self.name.clone(),
            self.id.clone(),
            self.label.clone(),
            self.value.clone(),
            self.placeholder.clone(),
            yes_no(self.required),
            yes_no(self.disabled),
            yes_no(self.readonly),
            yes_no(self.hidden),
            yes_no(self.checked),
            self.min.clone(),
            self.max.clone(),
            self.maxlength.clone(),
            self.pattern.clone(),
            self.rows.clone(),
            self.cols.clone(),
            yes_no(self.multiple),
            self.size.clone(),
            self.options_count().map(|n| n.to_string()).unwrap_or_default(),
            self.class.clone(),
            self.aria_label.clone(),
            self.text.clone(),
            data,
        ]
    }
}

const METADATA_COLUMNS: &[&str] = &["URL", "Page_Title", "Description", "Scraped_DateTime"];
const CONTACT_COLUMNS: &[&str] = &["Type", "Value", "Validated"];
const FORM_OVERVIEW_COLUMNS: &[&str] = &[
    "Form_Number",
    "Form_ID",
    "Form_Name",
    "Form_Class",
    "Action_URL",
    "Method",
    "Encoding_Type",
    "Autocomplete",
    "Target",
    "Total_Fields",
    "Hidden_Fields",
    "Required_Fields",
    "Disabled_Fields",
];
const FORM_OPTION_COLUMNS: &[&str] = &[
    "Field_Name",
    "Field_ID",
    "Field_Label",
    "Option_Value",
    "Option_Text",
    "Selected",
    "Disabled",
];

/// Flatten metadata and per-category data into the display-ordered table set.
///
/// `1_Metadata` is always present; categories without records add nothing.
#[must_use]
pub fn normalize(metadata: &PageMetadata, data: &BTreeMap<Category, CategoryData>) -> TableSet {
    let mut tables = vec![metadata_table(metadata)];
    // BTreeMap iteration follows Category's display order.
    for records in data.values() {
        tables.extend(category_tables(records));
    }
    TableSet(tables)
}

/// `1_Metadata`: a single row.
#[must_use]
pub fn metadata_table(metadata: &PageMetadata) -> NamedTable {
    NamedTable::from_columns(
        "1_Metadata",
        METADATA_COLUMNS,
        vec![vec![
            metadata.url.clone(),
            metadata.title.clone(),
            metadata.description.clone(),
            metadata.scraped_at(),
        ]],
    )
}

/// Tables for one category, empty when it has no records.
#[must_use]
pub fn category_tables(data: &CategoryData) -> Vec<NamedTable> {
    let name = |category: Category, suffix: &str| format!("{}_{suffix}", category.sort_key());

    match data {
        CategoryData::Titles(v) => record_table(name(Category::Titles, "Titles"), v).into_iter().collect(),
        CategoryData::Descriptions(v) => record_table(name(Category::Descriptions, "Descriptions"), v)
            .into_iter()
            .collect(),
        CategoryData::Images(v) => record_table(name(Category::Images, "Images"), v).into_iter().collect(),
        CategoryData::Links(v) => record_table(name(Category::Links, "Links"), v).into_iter().collect(),
        CategoryData::Tables(v) => v.iter().map(page_table).collect(),
        CategoryData::Contact(info) => contact_table(info).into_iter().collect(),
        CategoryData::Prices(v) => record_table(name(Category::Prices, "Prices"), v).into_iter().collect(),
        CategoryData::Videos(v) => record_table(name(Category::Videos, "Videos"), v).into_iter().collect(),
        CategoryData::Forms(v) => v.iter().flat_map(form_tables).collect(),
        CategoryData::Meta(v) => record_table(name(Category::Meta, "Meta_Tags"), v).into_iter().collect(),
    }
}

/// One row per record; `None` for an empty list.
#[must_use]
pub fn record_table<R: TabularRecord>(name: String, records: &[R]) -> Option<NamedTable> {
    if records.is_empty() {
        return None;
    }
    Some(NamedTable::from_columns(
        name,
        R::COLUMNS,
        records.iter().map(R::cells).collect(),
    ))
}

fn page_table(table: &TableRecord) -> NamedTable {
    NamedTable::new(
        format!("{}_Table_{}", Category::Tables.sort_key(), table.table_number),
        table.headers.clone(),
        table.rows.clone(),
    )
}

fn contact_table(info: &ContactInfo) -> Option<NamedTable> {
    let rows: Vec<Vec<String>> = info
        .emails
        .iter()
        .map(|e| ("Email", e))
        .chain(info.phones.iter().map(|p| ("Phone", p)))
        .map(|(kind, value)| vec![kind.to_string(), value.clone(), "Yes".to_string()])
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(NamedTable::from_columns(
        format!("{}_Contact_Info", Category::Contact.sort_key()),
        CONTACT_COLUMNS,
        rows,
    ))
}

/// `Overview`, `Fields` (when any) and `Options` (when any select has options).
fn form_tables(form: &FormRecord) -> Vec<NamedTable> {
    let prefix = format!("{}_Form_{}", Category::Forms.sort_key(), form.form_number);

    let overview = vec![
        form.form_number.to_string(),
        form.form_id.clone(),
        form.form_name.clone(),
        form.form_class.clone(),
        form.action.clone(),
        form.method.clone(),
        form.enctype.clone(),
        form.autocomplete.clone(),
        form.target.clone(),
        form.total_fields.to_string(),
        form.hidden_fields.to_string(),
        form.required_fields.to_string(),
        form.disabled_fields.to_string(),
    ];
    let mut tables = vec![NamedTable::from_columns(
        format!("{prefix}_Overview"),
        FORM_OVERVIEW_COLUMNS,
        vec![overview],
    )];
    tables.extend(record_table(format!("{prefix}_Fields"), &form.fields));

    let options: Vec<Vec<String>> = form
        .fields
        .iter()
        .flat_map(|field| {
            field.options.iter().map(move |opt| {
                vec![
                    field.name.clone(),
                    field.id.clone(),
                    field.label.clone(),
                    opt.value.clone(),
                    opt.text.clone(),
                    yes_no(opt.selected),
                    yes_no(opt.disabled),
                ]
            })
        })
        .collect();
    if !options.is_empty() {
        tables.push(NamedTable::from_columns(
            format!("{prefix}_Options"),
            FORM_OPTION_COLUMNS,
            options,
        ));
    }

    tables
}
