//! Condenser selection from an ordered catalog bucket.

use tracing::debug;

use crate::support::{
    catalog::{Catalog, CondenserEntry},
    simultaneity::apply_vrf_cap,
};

use super::{RatedCondenser, SelectError, Selection, SelectionInput, Status};

/// Rates every condenser in the request's bucket and picks the ideal one.
///
/// The ideal condenser is the one with the highest usage among those whose
/// load ratio is within the applied simultaneity. Ties keep the earlier entry.
///
/// # Errors
///
/// Returns [`SelectError::Catalog`] if the brand has no VRF section.
pub(crate) fn select(catalog: &Catalog, input: &SelectionInput) -> Result<Selection, SelectError> {
    let bucket = catalog.condensers(input.brand, input.orientation)?;
    let brand_ceiling = catalog.simultaneity_ceiling(input.brand)?;

    let applied = apply_vrf_cap(input.brand, input.percent);
    let ratio = applied.ratio();

    let sum = input.total_load();
    let load = sum as f64;
    let min_required = (load / ratio).round() as u64;

    let condensers: Vec<_> = bucket.iter().map(|c| rate(c, load, ratio)).collect();

    let ideal = condensers
        .iter()
        .enumerate()
        .filter(|(_, c)| c.within_ceiling)
        .fold(None, |best: Option<(usize, f64)>, (i, c)| match best {
            Some((_, usage)) if c.usage_percent <= usage => best,
            _ => Some((i, c.usage_percent)),
        })
        .map(|(i, _)| i);

    match ideal {
        Some(i) => debug!(
            brand = %input.brand,
            orientation = %input.orientation,
            sum,
            condenser = %condensers[i].name,
            "selected VRF condenser"
        ),
        None => debug!(
            brand = %input.brand,
            orientation = %input.orientation,
            sum,
            percent = applied.value(),
            "no VRF condenser within simultaneity"
        ),
    }

    Ok(Selection {
        brand: input.brand,
        orientation: input.orientation,
        requested_percent: input.percent,
        applied_percent: applied,
        brand_ceiling,
        sum,
        min_required,
        condensers,
        ideal,
    })
}

fn rate(condenser: &CondenserEntry, load: f64, ratio: f64) -> RatedCondenser {
    let nominal = f64::from(condenser.nominal());
    let limit = (nominal * ratio).round();

    let status = if load <= limit {
        Status::Ok
    } else if load <= f64::from(condenser.max()) {
        Status::Warn
    } else {
        Status::Error
    };

    RatedCondenser {
        name: condenser.name().to_owned(),
        nominal: condenser.nominal(),
        max: condenser.max(),
        limit: limit as u64,
        usage_percent: (load / nominal * 100.0 * 10.0).round() / 10.0,
        status,
        within_ceiling: load / nominal <= ratio,
    }
}
