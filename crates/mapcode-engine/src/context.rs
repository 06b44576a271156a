//! The immutable encode/decode context.

use mapcode_core::{MapcodeZone, Mapcode, TerritoryCatalog, TerritoryId};
use mapcode_data::{decode_model, DataError, DataModel, MIN_VERSION};
use mapcode_index::SubAreaIndex;
use tracing::info;

use crate::config::{read_file, ConfigError, ContextConfig};
use crate::decoder;
use crate::encoder::{self, EncodeOptions};

/// Everything encoding and decoding read: the territory catalog, the
/// record model and the spatial index over it.
///
/// Built once and never mutated; share it by reference (or behind an
/// `Arc`) between any number of threads.
#[derive(Clone, Debug)]
pub struct MapcodeContext {
    catalog: TerritoryCatalog,
    model: DataModel,
    index: SubAreaIndex,
}

impl MapcodeContext {
    /// Parse a data blob and pair it with `catalog`.
    pub fn new(catalog: TerritoryCatalog, bytes: &[u8]) -> Result<Self, ConfigError> {
        let model = decode_model(bytes, Some(catalog.len()), MIN_VERSION)?;
        Self::from_parts(catalog, model)
    }

    /// Pair an already decoded model with `catalog` and build the index.
    pub fn from_parts(catalog: TerritoryCatalog, model: DataModel) -> Result<Self, ConfigError> {
        if model.territory_count() != catalog.len() {
            return Err(DataError::TerritoryCountMismatch {
                found: model.territory_count(),
                expected: catalog.len(),
            }
            .into());
        }
        let index = SubAreaIndex::build(&model);
        info!(
            territories = catalog.len(),
            records = model.record_count(),
            version = model.version(),
            "mapcode context ready"
        );
        Ok(Self {
            catalog,
            model,
            index,
        })
    }

    /// Load both files named by `config`.
    pub fn from_config(config: &ContextConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let text = read_file(&config.catalog_path)?;
        let text = String::from_utf8_lossy(&text);
        let catalog = TerritoryCatalog::parse(&text)?;
        let bytes = read_file(&config.data_path)?;
        let model = decode_model(&bytes, Some(catalog.len()), config.minimum_version)?;
        Self::from_parts(catalog, model)
    }

    /// The territory catalog.
    pub fn catalog(&self) -> &TerritoryCatalog {
        &self.catalog
    }

    /// The record model.
    pub fn model(&self) -> &DataModel {
        &self.model
    }

    /// The spatial index.
    pub fn index(&self) -> &SubAreaIndex {
        &self.index
    }

    /// See [`encoder::encode`].
    pub fn encode(&self, lat_deg: f64, lon_deg: f64, filter: Option<TerritoryId>, options: EncodeOptions) -> Vec<Mapcode> {
        encoder::encode(self, lat_deg, lon_deg, filter, options)
    }

    /// See [`decoder::decode_to_zone`].
    pub fn decode_to_zone(&self, code: &str, territory: TerritoryId) -> MapcodeZone {
        decoder::decode_to_zone(self, code, territory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcode_core::territory::CatalogEntry;
    use mapcode_core::Boundary;
    use mapcode_data::{encode_model, RecordFlags, TerritoryRecord};

    fn catalog(codes: &[&str]) -> TerritoryCatalog {
        TerritoryCatalog::from_entries(codes.iter().map(|c| CatalogEntry::new(c)).collect()).unwrap()
    }

    fn world_model() -> DataModel {
        DataModel::from_territories(
            MIN_VERSION,
            vec![vec![TerritoryRecord::new(
                Boundary::new(-90_000_000, -180_000_000, 90_000_001, 180_000_000),
                RecordFlags::new(54).unwrap(),
                1,
            )]],
        )
        .unwrap()
    }

    #[test]
    fn builds_from_bytes() {
        let mut bytes = Vec::new();
        encode_model(&mut bytes, &world_model()).unwrap();
        let ctx = MapcodeContext::new(catalog(&["AAA"]), &bytes).unwrap();
        assert_eq!(ctx.model().record_count(), 1);
        assert_eq!(ctx.catalog().len(), 1);
    }

    #[test]
    fn territory_count_must_match() {
        let err = MapcodeContext::from_parts(catalog(&["NLD", "AAA"]), world_model()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Data(DataError::TerritoryCountMismatch {
                found: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn corrupt_bytes_are_fatal() {
        assert!(matches!(
            MapcodeContext::new(catalog(&["AAA"]), b"XX\xdc\x00\x00\x00\x01\x00"),
            Err(ConfigError::Data(DataError::InvalidMagic))
        ));
    }

    #[test]
    fn context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MapcodeContext>();
    }
}
