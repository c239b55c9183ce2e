//! Combination matching against a brand's Multi-Split models.

use tracing::debug;

use crate::support::{
    catalog::{Brand, Catalog, MultiSplitModel},
    combination::CombinationKey,
    simultaneity::{MultiSplitMode, lookup_key, multi_split_substitution},
};

use super::{BrandResult, BrandSelection, MatchError, MatchInput, MatchOutcome, SevenAsNine, Verdict};

/// Slack allowed when comparing a total against a fractional limit.
const LIMIT_TOLERANCE: f64 = 1e-9;

/// Evaluates a request against every model of the selected brands.
///
/// # Errors
///
/// Returns [`MatchError::Catalog`] if a selected brand has no Multi-Split
/// section in the catalog.
pub(crate) fn evaluate(catalog: &Catalog, input: &MatchInput) -> Result<MatchOutcome, MatchError> {
    let key = input.key();
    let total = key.total();
    let selection = input.brands();

    let mut verdicts = Vec::new();
    let mut best = Vec::new();

    for brand in selection.brands() {
        let brand_key = lookup_key(brand, &key);
        if brand_key != key {
            debug!(%brand, from = %key, to = %brand_key, "substituted evaporators for lookup");
        }

        let first = verdicts.len();
        for model in catalog.multi_split_models(brand)? {
            verdicts.push(check(model, &brand_key, total, input.mode()));
        }

        let winner = verdicts[first..]
            .iter()
            .filter(|v| v.is_compatible())
            .min_by_key(|v| v.nominal)
            .cloned();
        if winner.is_none() {
            debug!(%brand, combination = %key, "no compatible Multi-Split model");
        }
        best.push(BrandResult {
            brand,
            best: winner,
        });
    }

    Ok(MatchOutcome {
        seven_as_nine: substitution_note(selection, &key),
        evaporators: key,
        total,
        mode: input.mode(),
        selection,
        verdicts,
        best,
    })
}

/// Checks one model for membership and capacity.
fn check(model: &MultiSplitModel, key: &CombinationKey, total: u64, mode: MultiSplitMode) -> Verdict {
    let limit = mode.effective_limit(model.nominal(), model.max());
    let total = total as f64;

    Verdict {
        brand: model.brand(),
        model: model.name().to_owned(),
        nominal: model.nominal(),
        max: model.max(),
        limit,
        lookup_key: key.clone(),
        listed: model.supports(key),
        fits: total <= limit + LIMIT_TOLERANCE,
        simultaneity_percent: total / f64::from(model.nominal()) * 100.0,
        occupancy_percent: total / limit * 100.0,
    }
}

fn substitution_note(selection: BrandSelection, key: &CombinationKey) -> Option<SevenAsNine> {
    let (from, _) = multi_split_substitution(Brand::Daikin)?;
    if !key.values().contains(&from) {
        return None;
    }
    match selection {
        BrandSelection::Only(Brand::Daikin) => Some(SevenAsNine::Applied),
        BrandSelection::All => Some(SevenAsNine::AppliedForDaikin),
        BrandSelection::Only(_) => None,
    }
}
