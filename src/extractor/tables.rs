//! `<table>` extraction.
//!
//! Each table yields a header row and the data rows that carry any text.
//! Rows of a nested table belong to that table alone: a `<tr>` is owned by
//! its nearest `<table>` ancestor.

use crate::category::Category;
use crate::cleaning::clean_text;
use crate::dom::{self, NodeId, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::records::TableRecord;

use super::{check_depth, Harvest};

/// Every table with a header and at least one non-empty data row.
///
/// `table_number` is the 1-based index among all `<table>` elements, so
/// omitted tables leave gaps.
#[must_use]
pub fn extract_tables(page: &Page, opts: &Options) -> Harvest<TableRecord> {
    let mut harvest = Harvest::new(Category::Tables);

    for (idx, node) in page.select("table").nodes().iter().enumerate() {
        let table = Selection::from(*node);
        if let Err(e) = check_depth(&table, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        if let Some(record) = read_table(&table, node.id, idx + 1) {
            harvest.push(record);
        }
    }

    harvest
}

fn read_table(table: &Selection, table_id: NodeId, table_number: usize) -> Option<TableRecord> {
    let rows: Vec<Selection> = table
        .select("tr")
        .nodes()
        .iter()
        .map(|n| Selection::from(*n))
        .filter(|row| owning_table(row) == Some(table_id))
        .collect();
    let first_width = rows.first().map_or(0, |row| row_cells(row).len());

    let (head, body): (Vec<&Selection>, Vec<&Selection>) = rows.iter().partition(|row| in_thead(row));
    let (mut headers, body) = if head.is_empty() {
        match body.split_first() {
            Some((first, rest)) => (row_cells(first), rest.to_vec()),
            None => (Vec::new(), Vec::new()),
        }
    } else {
        (head.iter().flat_map(|row| row_cells(row)).collect(), body)
    };

    if headers.iter().all(String::is_empty) {
        headers = synthetic_headers(first_width);
    }

    let data: Vec<Vec<String>> = body
        .iter()
        .map(|row| row_cells(row))
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    if headers.is_empty() || data.is_empty() {
        return None;
    }

    Some(TableRecord {
        table_number,
        row_count: data.len(),
        column_count: headers.len(),
        headers,
        rows: data,
    })
}

/// `Column_1`..`Column_n`.
#[must_use]
pub fn synthetic_headers(width: usize) -> Vec<String> {
    (1..=width).map(|i| format!("Column_{i}")).collect()
}

/// Cleaned text of the row's own `th`/`td` cells.
fn row_cells(row: &Selection) -> Vec<String> {
    dom::children(row)
        .nodes()
        .iter()
        .map(|n| Selection::from(*n))
        .filter(|cell| dom::is_tag(cell, "th") || dom::is_tag(cell, "td"))
        .map(|cell| clean_text(&dom::text_content(&cell)))
        .collect()
}

fn owning_table(row: &Selection) -> Option<NodeId> {
    dom::closest_ancestor(row, "table", None).and_then(|t| dom::node_id(&t))
}

fn in_thead(row: &Selection) -> bool {
    dom::closest_ancestor(row, "thead", Some("table")).is_some()
}
