//! Menu export/import
//!
//! JSON (pretty-printed array) and CSV (fixed column order, quoted text
//! fields) interchange payloads. Import collects per-row errors and keeps
//! going; only malformed JSON or a header-only CSV aborts the whole run.

use super::{MenuStore, MenuStoreError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::{MenuAction, MenuActionKind, MenuItem, MenuItemUpdate};
use shared::util;
use tracing::info;

/// Fixed CSV column order
const CSV_HEADERS: [&str; 8] = [
    "id",
    "name",
    "price",
    "description",
    "category",
    "available",
    "popularity",
    "revenue",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Policy for an imported record whose name matches an existing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Overwrite only the fields the incoming record supplies
    Merge,
    /// Rebuild the item from the record, defaulting unsupplied fields
    /// (id and creation time are kept)
    Replace,
    /// Leave existing matches untouched
    Skip,
}

/// Outcome of an import run: successful records plus per-row errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub success: usize,
    pub errors: Vec<String>,
}

impl ImportReport {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: 0,
            errors: vec![message.into()],
        }
    }
}

/// One incoming record; `None` fields were absent from the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    name: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    category: Option<String>,
    available: Option<bool>,
    popularity: Option<i64>,
    revenue: Option<f64>,
}

impl MenuStore {
    /// Export the listed items. Unknown IDs are skipped.
    pub fn export(&self, ids: &[String], format: ExportFormat) -> Result<String, MenuStoreError> {
        let selected: Vec<&MenuItem> = self
            .items()
            .iter()
            .filter(|i| ids.contains(&i.id))
            .collect();

        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&selected)?),
            ExportFormat::Csv => {
                let mut lines = vec![CSV_HEADERS.join(",")];
                for item in selected {
                    lines.push(
                        [
                            item.id.clone(),
                            csv_quote(&item.name),
                            item.price.to_string(),
                            csv_quote(&item.description),
                            item.category.clone(),
                            item.available.to_string(),
                            item.popularity.to_string(),
                            item.revenue.to_string(),
                        ]
                        .join(","),
                    );
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Import records from a JSON or CSV payload.
    ///
    /// Records matching an existing item by exact name follow the merge
    /// strategy; unmatched records become new items with generated IDs and
    /// zeroed popularity/revenue. A record missing name or category fails
    /// that row only. Parse failure of the payload as a whole aborts with
    /// zero successes.
    pub fn import(
        &mut self,
        data: &str,
        format: ExportFormat,
        strategy: MergeStrategy,
    ) -> ImportReport {
        let (records, mut report) = match format {
            ExportFormat::Json => match parse_json(data) {
                Ok(records) => (records, ImportReport::default()),
                Err(report) => return report,
            },
            ExportFormat::Csv => match parse_csv(data) {
                Ok(records) => (records, ImportReport::default()),
                Err(report) => return report,
            },
        };

        // header offset: CSV data rows start on physical line 2
        let row_number = |index: usize| match format {
            ExportFormat::Csv => index + 2,
            ExportFormat::Json => index + 1,
        };

        let mut touched_ids = Vec::new();
        let mut old_items = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let (Some(name), Some(category)) = (
                record.name.clone().filter(|n| !n.is_empty()),
                record.category.clone().filter(|c| !c.is_empty()),
            ) else {
                report.errors.push(format!(
                    "Row {}: Missing required fields (name, category)",
                    row_number(index)
                ));
                continue;
            };

            match self.items.iter().position(|i| i.name == name) {
                Some(existing) => match strategy {
                    MergeStrategy::Skip => {}
                    MergeStrategy::Merge => {
                        old_items.push(self.items[existing].clone());
                        touched_ids.push(self.items[existing].id.clone());
                        merge_changes(&record, category).apply_to(&mut self.items[existing]);
                        self.items[existing].updated_at = Utc::now();
                        report.success += 1;
                    }
                    MergeStrategy::Replace => {
                        let old = self.items[existing].clone();
                        touched_ids.push(old.id.clone());
                        self.items[existing] =
                            record_to_item(&record, name, category, old.id.clone(), old.created_at);
                        old_items.push(old);
                        report.success += 1;
                    }
                },
                None => {
                    let item = record_to_item(
                        &record,
                        name,
                        category,
                        util::item_id(),
                        Utc::now(),
                    );
                    self.items.push(item);
                    report.success += 1;
                }
            }
        }

        if report.success > 0 {
            // Snapshots cover overwritten matches only; undo does not
            // remove freshly inserted records.
            self.record(MenuAction::with_batch_id(
                MenuActionKind::BulkUpdate {
                    ids: touched_ids,
                    old_items,
                    changes: MenuItemUpdate::default(),
                },
                util::batch_id(),
            ));
            self.persist();
        }

        info!(
            success = report.success,
            errors = report.errors.len(),
            "import finished"
        );
        report
    }
}

fn merge_changes(record: &ImportRecord, category: String) -> MenuItemUpdate {
    MenuItemUpdate {
        name: record.name.clone(),
        price: record.price,
        description: record.description.clone(),
        category: Some(category),
        available: record.available,
        ..MenuItemUpdate::default()
    }
}

fn record_to_item(
    record: &ImportRecord,
    name: String,
    category: String,
    id: String,
    created_at: chrono::DateTime<Utc>,
) -> MenuItem {
    MenuItem {
        id,
        name,
        price: record.price.unwrap_or(0.0),
        description: record.description.clone().unwrap_or_default(),
        category,
        available: record.available.unwrap_or(true),
        image_url: None,
        popularity: 0,
        revenue: 0.0,
        created_at,
        updated_at: Utc::now(),
        ingredient_based: false,
        ingredients: Vec::new(),
        allergens: Vec::new(),
        spice_level: None,
        nutrition: None,
    }
}

fn csv_quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn parse_json(data: &str) -> Result<Vec<ImportRecord>, ImportReport> {
    let value: serde_json::Value =
        serde_json::from_str(data).map_err(|_| ImportReport::failed("Invalid JSON format"))?;

    let elements = match value {
        serde_json::Value::Array(elements) => elements,
        other => vec![other],
    };

    // a non-object element degrades to an empty record and surfaces as a
    // missing-required-fields row error
    let records = elements
        .into_iter()
        .map(|element| serde_json::from_value(element).unwrap_or_default())
        .collect();
    Ok(records)
}

fn parse_csv(data: &str) -> Result<Vec<ImportRecord>, ImportReport> {
    let lines: Vec<&str> = data.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(ImportReport::failed(
            "CSV must have at least header and one data row",
        ));
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut records = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let values: Vec<String> = line.split(',').map(csv_unquote).collect();
        let mut record = ImportRecord::default();

        for (header, value) in headers.iter().zip(values) {
            match header.as_str() {
                "name" => record.name = Some(value),
                "price" => record.price = Some(value.parse().unwrap_or(0.0)),
                "description" => record.description = Some(value),
                "category" => record.category = Some(value),
                "available" => record.available = Some(value.eq_ignore_ascii_case("true")),
                "popularity" => record.popularity = Some(value.parse().unwrap_or(0)),
                "revenue" => record.revenue = Some(value.parse().unwrap_or(0.0)),
                _ => {}
            }
        }
        records.push(record);
    }
    Ok(records)
}

fn csv_unquote(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}
