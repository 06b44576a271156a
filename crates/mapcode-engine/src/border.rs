//! Border proximity.

use mapcode_core::{MicroPoint, TerritoryId};

use crate::context::MapcodeContext;
use crate::digits::x_divider;

/// Half-width of the border band in latitude microdegrees.
const BAND_LAT: i32 = 60;

/// Whether `p` lies close to the edges of more than one non-restricted
/// record of `territory`.
///
/// Near such edges a code may decode into a neighbouring record's area,
/// so callers comparing encode and decode results treat these points
/// with care. Always `false` for the international territory.
pub fn is_near_multiple_borders(ctx: &MapcodeContext, p: &MicroPoint, territory: TerritoryId) -> bool {
    if territory == ctx.catalog().international() || territory.index() >= ctx.catalog().len() {
        return false;
    }
    let model = ctx.model();
    let mut near = 0;
    for i in model.record_range(territory).rev() {
        if model.record(i).flags.restricted {
            continue;
        }
        let mut b = model.boundary(i);
        let band_lon = x_divider(b.lat_min, b.lat_max) / 4;
        if b.extend(BAND_LAT, band_lon).contains(p)
            && !b.extend(-2 * BAND_LAT, -2 * band_lon).contains(p)
        {
            near += 1;
            if near > 1 {
                return true;
            }
        }
    }
    false
}
