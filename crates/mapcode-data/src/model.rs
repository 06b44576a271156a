//! The loaded, immutable data model.

use std::ops::RangeInclusive;

use mapcode_core::{Boundary, TerritoryId};

use crate::error::DataError;
use crate::record::TerritoryRecord;

/// All territory records and the territory-to-record partition.
///
/// Territory `t` owns records `first[t] ..= first[t + 1] - 1`. Every
/// territory owns at least one record; its last record is the territory's
/// outer boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataModel {
    version: u16,
    records: Vec<TerritoryRecord>,
    first_record: Vec<u16>,
}

impl DataModel {
    /// Assemble a model from one record list per territory.
    pub fn from_territories(
        version: u16,
        territories: Vec<Vec<TerritoryRecord>>,
    ) -> Result<Self, DataError> {
        let mut first_record = Vec::with_capacity(territories.len() + 1);
        let mut records = Vec::new();
        for recs in territories {
            first_record.push(records.len() as u16);
            records.extend(recs);
        }
        first_record.push(records.len() as u16);
        Self::from_parts(version, records, first_record)
    }

    /// Assemble a model from a flat record array and first-record table,
    /// validating that the table partitions the records.
    pub fn from_parts(
        version: u16,
        records: Vec<TerritoryRecord>,
        first_record: Vec<u16>,
    ) -> Result<Self, DataError> {
        if records.len() > u16::MAX as usize {
            return Err(DataError::InvalidIndex {
                territory: 0,
                detail: format!("{} records exceed the 16-bit index", records.len()),
            });
        }
        if first_record.len() < 2 {
            return Err(DataError::InvalidIndex {
                territory: 0,
                detail: "no territories".to_string(),
            });
        }
        if first_record[0] != 0 {
            return Err(DataError::InvalidIndex {
                territory: 0,
                detail: format!("first territory starts at record {}", first_record[0]),
            });
        }
        for (t, pair) in first_record.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(DataError::InvalidIndex {
                    territory: t,
                    detail: format!("record range {}..{} is empty", pair[0], pair[1]),
                });
            }
        }
        let end = first_record[first_record.len() - 1] as usize;
        if end != records.len() {
            return Err(DataError::InvalidIndex {
                territory: first_record.len() - 2,
                detail: format!("index ends at {end}, record count is {}", records.len()),
            });
        }
        Ok(Self {
            version,
            records,
            first_record,
        })
    }

    /// Data format version.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Number of territories.
    pub fn territory_count(&self) -> usize {
        self.first_record.len() - 1
    }

    /// Number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// All records.
    pub fn records(&self) -> &[TerritoryRecord] {
        &self.records
    }

    /// The raw first-record table (territory count + 1 entries).
    pub fn first_record_table(&self) -> &[u16] {
        &self.first_record
    }

    /// Record by index. Panics on an out-of-range index.
    pub fn record(&self, index: usize) -> &TerritoryRecord {
        &self.records[index]
    }

    /// Rectangle of a record.
    pub fn boundary(&self, index: usize) -> Boundary {
        self.records[index].boundary
    }

    /// First record of a territory.
    pub fn first_record(&self, territory: TerritoryId) -> usize {
        self.first_record[territory.index()] as usize
    }

    /// Last record of a territory: its outer boundary.
    pub fn last_record(&self, territory: TerritoryId) -> usize {
        self.first_record[territory.index() + 1] as usize - 1
    }

    /// Record indices of a territory, innermost first.
    pub fn record_range(&self, territory: TerritoryId) -> RangeInclusive<usize> {
        self.first_record(territory)..=self.last_record(territory)
    }

    /// Outer boundary of a territory.
    pub fn territory_boundary(&self, territory: TerritoryId) -> Boundary {
        self.boundary(self.last_record(territory))
    }
}
