//! The edge-keyed record index.

use std::collections::BTreeMap;

use mapcode_core::{MicroPoint, TerritoryId};
use mapcode_data::DataModel;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::range::{clip_pieces, AxisRange, Pieces};

type RecordList = SmallVec<[u16; 8]>;

/// Point-to-candidate-records index over one [`DataModel`].
///
/// Built once from an immutable model and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct SubAreaIndex {
    lon_edges: BTreeMap<i32, RecordList>,
    lat_edges: BTreeMap<i32, RecordList>,
    record_territory: Vec<u16>,
}

struct Entry {
    record: u16,
    lon: Pieces,
    lat: Pieces,
}

impl SubAreaIndex {
    /// Build the index.
    ///
    /// Each territory is processed from its outer record inward. The outer
    /// record's normalised ranges bound every inner record of the same
    /// territory, so an inner record never indexes area its territory
    /// does not cover.
    pub fn build(model: &DataModel) -> Self {
        let mut entries = Vec::with_capacity(model.record_count());
        let mut record_territory = vec![0u16; model.record_count()];

        for t in 0..model.territory_count() {
            let territory = TerritoryId(t as u16);
            let mut bound_lon = Pieces::new();
            let mut bound_lat = Pieces::new();
            let mut kept = 0usize;
            for i in model.record_range(territory).rev() {
                record_territory[i] = t as u16;
                let b = model.boundary(i);
                let mut lon = AxisRange::from_half_open(b.lon_min, b.lon_max).normalize_lon();
                let mut lat = AxisRange::from_half_open(b.lat_min, b.lat_max).normalize_lat();
                if i == model.last_record(territory) {
                    bound_lon = lon.clone();
                    bound_lat = lat.clone();
                } else {
                    lon = clip_pieces(&lon, &bound_lon);
                    lat = clip_pieces(&lat, &bound_lat);
                }
                if lon.is_empty() || lat.is_empty() {
                    warn!(record = i, territory = t, "record has an empty bounded range");
                    continue;
                }
                kept += 1;
                entries.push(Entry {
                    record: i as u16,
                    lon,
                    lat,
                });
            }
            debug!(territory = t, records = kept, "indexed territory sub-areas");
        }

        let mut lon_edges: BTreeMap<i32, RecordList> = BTreeMap::new();
        let mut lat_edges: BTreeMap<i32, RecordList> = BTreeMap::new();
        for e in &entries {
            for r in &e.lon {
                lon_edges.entry(r.min).or_default();
                lon_edges.entry(r.max).or_default();
            }
            for r in &e.lat {
                lat_edges.entry(r.min).or_default();
                lat_edges.entry(r.max).or_default();
            }
        }
        for e in &entries {
            add_to_edges(&mut lon_edges, &e.lon, e.record);
            add_to_edges(&mut lat_edges, &e.lat, e.record);
        }

        info!(
            records = entries.len(),
            lon_keys = lon_edges.len(),
            lat_keys = lat_edges.len(),
            "built sub-area index"
        );
        Self {
            lon_edges,
            lat_edges,
            record_territory,
        }
    }

    /// Records whose indexed area may contain `p`, ascending.
    pub fn candidate_records(&self, p: &MicroPoint) -> Vec<usize> {
        let lon = lookup(&self.lon_edges, p.lon_micro);
        if lon.is_empty() {
            return Vec::new();
        }
        let lat = lookup(&self.lat_edges, p.lat_micro);
        let mut out: Vec<usize> = lon
            .iter()
            .filter(|r| lat.contains(r))
            .map(|&r| r as usize)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Territories owning at least one candidate record, ascending by
    /// territory number.
    pub fn candidate_territories(&self, p: &MicroPoint) -> SmallVec<[TerritoryId; 8]> {
        let mut out: SmallVec<[TerritoryId; 8]> = SmallVec::new();
        for r in self.candidate_records(p) {
            let t = TerritoryId(self.record_territory[r]);
            if out.last() != Some(&t) {
                out.push(t);
            }
        }
        out
    }

    /// Number of distinct longitude edges.
    pub fn lon_key_count(&self) -> usize {
        self.lon_edges.len()
    }

    /// Number of distinct latitude edges.
    pub fn lat_key_count(&self) -> usize {
        self.lat_edges.len()
    }
}

fn add_to_edges(edges: &mut BTreeMap<i32, RecordList>, pieces: &[AxisRange], record: u16) {
    for r in pieces {
        for (_, list) in edges.range_mut(r.min..=r.max) {
            if list.last() != Some(&record) {
                list.push(record);
            }
        }
    }
}

/// The list at an exact edge, or the union of the nearest edges on either
/// side. A value outside every edge finds nothing.
fn lookup(edges: &BTreeMap<i32, RecordList>, v: i32) -> RecordList {
    if let Some(list) = edges.get(&v) {
        return list.clone();
    }
    let below = edges.range(..v).next_back();
    let above = edges.range(v..).next();
    match (below, above) {
        (Some((_, lo)), Some((_, hi))) => {
            let mut out = lo.clone();
            for r in hi {
                if !out.contains(r) {
                    out.push(*r);
                }
            }
            out
        }
        _ => RecordList::new(),
    }
}
