//! Loading of the static A/B test dataset.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Counts, RawRecord, Variation};

/// Dataset compiled into the binary, used when no dataset path is configured.
pub const BUNDLED_DATASET: &str = include_str!("../data/data.json");

/// Date format of the `date` field of each record.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
struct SourceVariation {
    id: Option<u64>,
    name: String,
}

#[derive(Deserialize)]
struct SourceRecord {
    date: String,
    #[serde(default)]
    visits: Counts,
    #[serde(default)]
    conversions: Counts,
}

#[derive(Deserialize)]
struct SourceDataset {
    variations: Vec<SourceVariation>,
    data: Vec<SourceRecord>,
}

/// Variations and daily records of one A/B test.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub variations: Vec<Variation>,
    pub records: Vec<RawRecord>,
}

impl Dataset {
    /// Parse a dataset from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let source: SourceDataset = serde_json::from_str(json)?;

        let variations = source
            .variations
            .into_iter()
            .map(|v| Variation {
                id: v.id.map(|id| id.to_string()).unwrap_or_else(|| "0".to_string()),
                name: v.name,
            })
            .collect();

        let records = source
            .data
            .into_iter()
            .map(|r| {
                let date = parse_date(&r.date)?;
                Ok(RawRecord {
                    date,
                    visits: r.visits,
                    conversions: r.conversions,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            variations,
            records,
        })
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The dataset shipped with the application.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Ids of every variation, in dataset order.
    pub fn variation_ids(&self) -> Vec<String> {
        self.variations.iter().map(|v| v.id.clone()).collect()
    }

    pub fn variation_name(&self, id: &str) -> Option<&str> {
        self.variations
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| Error::InvalidDate {
        date: value.to_string(),
        source,
    })
}
