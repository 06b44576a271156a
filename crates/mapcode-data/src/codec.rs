//! Binary encode/decode for the data model.
//!
//! All integers are little-endian. The layout has no padding and no
//! self-describing schema; the header counts fully determine the size.

use std::io::{Read, Write};

use mapcode_core::Boundary;
use tracing::info;

use crate::error::DataError;
use crate::model::DataModel;
use crate::record::{RecordFlags, TerritoryRecord};
use crate::{HEADER_LEN, MAGIC, RECORD_LEN};

// ── Primitive writers ───────────────────────────────────────────

/// Write a little-endian u16.
pub fn write_u16_le(w: &mut dyn Write, v: u16) -> Result<(), DataError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), DataError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), DataError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a little-endian u16.
pub fn read_u16_le(r: &mut dyn Read) -> Result<u16, DataError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, DataError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, DataError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

// ── Model encode/decode ─────────────────────────────────────────

/// Byte length of a blob with the given counts.
pub fn expected_len(record_count: usize, territory_count: usize) -> usize {
    HEADER_LEN + 2 * (territory_count + 1) + RECORD_LEN * record_count
}

/// Parse and validate a data blob.
///
/// `expected_territories` is the territory count of the catalog the model
/// will be paired with; `None` skips that check. Versions below
/// `minimum_version` are rejected.
pub fn decode_model(
    bytes: &[u8],
    expected_territories: Option<usize>,
    minimum_version: u16,
) -> Result<DataModel, DataError> {
    if bytes.len() < HEADER_LEN {
        return Err(DataError::Truncated);
    }
    if bytes[..2] != MAGIC {
        return Err(DataError::InvalidMagic);
    }
    let mut r: &[u8] = &bytes[2..];
    let version = read_u16_le(&mut r)?;
    if version < minimum_version {
        return Err(DataError::UnsupportedVersion {
            found: version,
            minimum: minimum_version,
        });
    }
    let record_count = read_u16_le(&mut r)? as usize;
    let territory_count = read_u16_le(&mut r)? as usize;
    if let Some(expected) = expected_territories {
        if territory_count != expected {
            return Err(DataError::TerritoryCountMismatch {
                found: territory_count,
                expected,
            });
        }
    }
    let expected = expected_len(record_count, territory_count);
    if bytes.len() != expected {
        return Err(DataError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let mut first_record = Vec::with_capacity(territory_count + 1);
    for _ in 0..=territory_count {
        first_record.push(read_u16_le(&mut r)?);
    }

    let mut records = Vec::with_capacity(record_count);
    for _ in 0..record_count {
        let lon_min = read_i32_le(&mut r)?;
        let lat_min = read_i32_le(&mut r)?;
        let lon_max = read_i32_le(&mut r)?;
        let lat_max = read_i32_le(&mut r)?;
        let packed = read_u32_le(&mut r)?;
        records.push(TerritoryRecord::new(
            Boundary::new(lat_min, lon_min, lat_max, lon_max),
            RecordFlags::from_raw((packed & 0xffff) as u16),
            (packed >> 16) as u16,
        ));
    }

    let model = DataModel::from_parts(version, records, first_record)?;
    info!(
        version,
        records = model.record_count(),
        territories = model.territory_count(),
        "loaded mapcode data model"
    );
    Ok(model)
}

/// Write a model in the exact layout [`decode_model`] reads.
pub fn encode_model(w: &mut dyn Write, model: &DataModel) -> Result<(), DataError> {
    w.write_all(&MAGIC)?;
    write_u16_le(w, model.version())?;
    write_u16_le(w, model.record_count() as u16)?;
    write_u16_le(w, model.territory_count() as u16)?;
    for &first in model.first_record_table() {
        write_u16_le(w, first)?;
    }
    for rec in model.records() {
        let b = rec.boundary;
        write_i32_le(w, b.lon_min)?;
        write_i32_le(w, b.lat_min)?;
        write_i32_le(w, b.lon_max)?;
        write_i32_le(w, b.lat_max)?;
        write_u32_le(w, rec.packed_word())?;
    }
    Ok(())
}
