//! CSV export of the transaction table
//!
//! One row per transaction with both the raw wire fields and the
//! formatted display strings.

use crate::dashboard::Dashboard;

/// Header row of the export
pub const CSV_HEADERS: [&str; 8] = [
    "id",
    "title",
    "type",
    "value",
    "formatted_value",
    "category",
    "created_at",
    "formatted_date",
];

/// Render the dashboard's transactions as CSV
pub fn render(dashboard: &Dashboard) -> Result<String, ::csv::Error> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for tx in dashboard.transactions() {
        let value = tx.value.to_string();
        let created_at = tx
            .created_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        writer.write_record([
            tx.id.as_str(),
            tx.title.as_str(),
            tx.kind.as_str(),
            value.as_str(),
            tx.formatted_value.as_str(),
            tx.category.title.as_str(),
            created_at.as_str(),
            tx.formatted_date.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
