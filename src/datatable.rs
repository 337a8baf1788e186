use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One domain entry as published by the statistics API.
///
/// The API sends the display name under `domain_name`; the exported column
/// is `domain_nama`, so the rename happens once, at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain_id: String,
    #[serde(rename(deserialize = "domain_name"))]
    pub domain_nama: String,
    pub domain_url: String,
}

/// The normalized, ordered collection of domain records from one API
/// response. Row order is the order the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTable {
    records: Vec<DomainRecord>,
}

impl DomainTable {
    /// Export column order is fixed.
    pub const COLUMNS: [&'static str; 3] = ["domain_id", "domain_nama", "domain_url"];

    /// Build a table from raw JSON records.
    ///
    /// A record missing any of the three expected fields, or carrying a
    /// non-string value in one of them, fails the whole build.
    pub fn from_records(values: &[Value]) -> Result<Self> {
        let mut records = Vec::with_capacity(values.len());
        for (idx, value) in values.iter().enumerate() {
            let record: DomainRecord = serde_json::from_value(value.clone())
                .with_context(|| format!("record {} does not match the domain record shape", idx))?;
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DomainRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&DomainRecord> {
        self.records.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        Self::COLUMNS.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get column names as a vector
    pub fn column_names(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    /// Convert to a vector of string vectors in export column order
    pub fn to_string_rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| {
                vec![
                    r.domain_id.clone(),
                    r.domain_nama.clone(),
                    r.domain_url.clone(),
                ]
            })
            .collect()
    }
}
