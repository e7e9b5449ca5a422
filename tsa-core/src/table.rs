//! DataTables options and the table initializer.

use crate::dom::Page;
use log::debug;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// Turns a plain table element into a sortable, paginated widget.
pub trait TableRenderer {
    fn enhance(&self, element_id: &str, options: &TableOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// An entry of the page-length menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(u32),
    All,
}

impl PageSize {
    /// The numeric value DataTables expects; `-1` means unlimited.
    pub fn length(&self) -> i64 {
        match self {
            PageSize::Rows(n) => i64::from(*n),
            PageSize::All => -1,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "All".to_string(),
        }
    }
}

/// DataTables configuration: `{order, pageLength, lengthMenu, responsive}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// `(column index, direction)` pairs.
    pub order: Vec<(usize, SortDirection)>,
    pub page_length: u32,
    #[serde(serialize_with = "serialize_length_menu")]
    pub length_menu: Vec<PageSize>,
    pub responsive: bool,
}

impl Default for TableOptions {
    /// Newest first on column 0, ten rows a page.
    fn default() -> Self {
        Self {
            order: vec![(0, SortDirection::Desc)],
            page_length: 10,
            length_menu: vec![
                PageSize::Rows(10),
                PageSize::Rows(25),
                PageSize::Rows(50),
                PageSize::All,
            ],
            responsive: true,
        }
    }
}

/// `[[10, 25, 50, -1], ["10", "25", "50", "All"]]`: values, then display labels.
fn serialize_length_menu<S: Serializer>(menu: &[PageSize], serializer: S) -> Result<S::Ok, S::Error> {
    let lengths: Vec<i64> = menu.iter().map(PageSize::length).collect();
    let labels: Vec<serde_json::Value> = menu
        .iter()
        .map(|size| match size {
            PageSize::Rows(n) => serde_json::Value::from(*n),
            PageSize::All => serde_json::Value::from(size.label()),
        })
        .collect();

    let mut seq = serializer.serialize_seq(Some(2))?;
    seq.serialize_element(&lengths)?;
    seq.serialize_element(&labels)?;
    seq.end()
}

/// Enhance the table with id `table_id` if it is on the page.
///
/// Returns whether the table was found. A missing table is not an error.
pub fn initialize_data_table<P: Page, R: TableRenderer>(page: &P, renderer: &R, table_id: &str) -> bool {
    if !page.has_element(table_id) {
        debug!("No table #{} on page, skipping", table_id);
        return false;
    }
    renderer.enhance(table_id, &TableOptions::default());
    true
}
