//! Manufacturer tables shipped with the crate.
//!
//! Some brand/model combinations are intentionally absent (e.g. Samsung 34 and
//! 48 Multi-Split, Samsung "Piso Teto" evaporators); lookups for them return
//! empty results.

use std::collections::BTreeMap;

use crate::support::combination::CombinationKey;

use super::{
    Brand, Catalog, CondenserEntry, EvaporatorEntry, EvaporatorGroup, MultiSplitModel,
    Orientation, vrf::VrfSection,
};

type Combos = &'static [&'static [u32]];

const SAMSUNG_18: Combos = &[
    &[7, 7], &[7, 9], &[7, 12], &[7, 18],
    &[9, 9], &[9, 12], &[9, 18],
    &[12, 12], &[12, 18],
];

const SAMSUNG_24: Combos = &[
    &[7, 7], &[7, 9], &[7, 12], &[7, 18],
    &[9, 9], &[9, 12], &[9, 18],
    &[12, 12], &[12, 18], &[18, 18],
    &[7, 7, 7], &[7, 7, 9], &[7, 7, 12], &[7, 7, 18],
    &[7, 9, 9], &[7, 9, 12], &[7, 9, 18],
    &[7, 12, 12], &[7, 12, 18],
    &[9, 9, 9], &[9, 9, 12], &[9, 9, 18],
    &[9, 12, 12], &[9, 12, 18],
    &[12, 12, 12],
];

const SAMSUNG_28: Combos = &[
    &[7, 7], &[7, 9], &[7, 12], &[7, 18], &[7, 24],
    &[9, 9], &[9, 12], &[9, 18], &[9, 24],
    &[12, 12], &[12, 18], &[12, 24],
    &[18, 18], &[18, 24],
    &[7, 7, 7], &[7, 7, 9], &[7, 7, 12], &[7, 7, 18], &[7, 7, 24],
    &[7, 9, 9], &[7, 9, 12], &[7, 9, 18], &[7, 9, 24],
    &[7, 12, 12], &[7, 12, 18], &[7, 18, 18],
    &[9, 9, 9], &[9, 9, 12], &[9, 9, 18], &[9, 9, 24],
    &[9, 12, 12], &[9, 12, 18],
    &[12, 12, 12], &[12, 12, 18],
    &[7, 7, 7, 7], &[7, 7, 7, 9], &[7, 7, 7, 12], &[7, 7, 7, 18],
    &[7, 7, 9, 9], &[7, 7, 9, 12], &[7, 7, 9, 18], &[7, 7, 12, 12],
    &[7, 9, 9, 9], &[7, 9, 9, 12], &[7, 9, 9, 18], &[7, 9, 12, 12],
    &[9, 9, 9, 9], &[9, 9, 9, 12], &[9, 9, 12, 12],
    &[12, 12, 12, 12], &[9, 9, 12, 18],
];

const DAIKIN_18_BI: Combos = &[&[9, 9], &[9, 12], &[12, 12]];

const DAIKIN_18_TRI: Combos = &[
    &[9, 9], &[9, 12], &[9, 18],
    &[12, 12], &[12, 18],
    &[9, 9, 9], &[9, 9, 12],
];

// Daikin lists grow by tier; each larger model accepts everything the
// previous one does plus the tier below.
const DAIKIN_TIER_24: Combos = &[
    &[9, 9], &[9, 12], &[9, 18],
    &[12, 12], &[12, 18], &[9, 9, 9], &[9, 9, 12],
    &[9, 20], &[12, 20], &[18, 18], &[18, 20],
    &[9, 9, 18], &[9, 9, 20], &[9, 12, 12], &[9, 12, 18], &[12, 12, 12],
];

const DAIKIN_TIER_28: Combos = &[
    &[9, 24], &[12, 24], &[18, 24], &[20, 20], &[20, 24],
    &[9, 9, 24], &[9, 12, 20], &[9, 12, 24], &[9, 18, 18], &[9, 18, 20], &[9, 20, 20],
    &[12, 12, 18], &[12, 12, 20], &[12, 12, 24], &[12, 18, 18], &[12, 18, 20],
    &[9, 9, 9, 9], &[9, 9, 9, 12], &[9, 9, 9, 18], &[9, 9, 9, 20],
    &[9, 9, 12, 12], &[9, 9, 12, 18], &[9, 9, 12, 20],
    &[9, 12, 12, 12], &[9, 12, 12, 18], &[12, 12, 12, 12],
];

const DAIKIN_TIER_34: Combos = &[
    &[9, 18, 24], &[9, 20, 24], &[12, 18, 24], &[12, 20, 20], &[18, 18, 18],
    &[9, 9, 9, 24], &[9, 9, 12, 24], &[9, 9, 18, 18], &[9, 12, 12, 20], &[12, 12, 12, 18],
];

const DAIKIN_TIER_38: Combos = &[
    &[24, 24],
    &[9, 9, 9, 9, 9], &[9, 9, 9, 9, 12], &[9, 9, 9, 9, 18], &[9, 9, 9, 12, 12], &[9, 9, 12, 12, 12],
];

/// LG models: name, nominal, max, evaporator ports.
const LG_MODELS: [(&str, u32, u32, usize); 6] = [
    ("LG 18", 18, 24, 2),
    ("LG 21", 21, 30, 3),
    ("LG 24", 24, 36, 3),
    ("LG 30", 30, 51, 4),
    ("LG 36", 36, 54, 5),
    ("LG 48", 48, 72, 5),
];

/// Evaporator rows: nominal, real, codes.
type Evaps = &'static [(u32, u32, &'static [&'static str])];

const SAMSUNG_EVAPORATORS: [(&str, Evaps); 5] = [
    (
        "Hi Wall",
        &[
            (5, 5_118, &["VEWS5"]),
            (7, 7_507, &["VEWS7"]),
            (9, 9_554, &["VEWS9"]),
            (12, 12_284, &["VEWS12"]),
            (15, 15_355, &["VEWS15"]),
            (18, 19_108, &["VEWS18"]),
            (24, 23_203, &["VEWS24"]),
            (28, 27_980, &["VEWS28"]),
        ],
    ),
    (
        "1 Via",
        &[
            (7, 7_507, &["VEC1S7"]),
            (9, 9_554, &["VEC1S9"]),
            (12, 12_284, &["VEC1S12"]),
            (18, 18_000, &["VEC1S18"]),
            (24, 24_000, &["VEC1S24"]),
        ],
    ),
    (
        "4 Vias",
        &[
            (9, 9_000, &["VEC4S9"]),
            (12, 12_000, &["VEC4S12"]),
            (18, 18_000, &["VEC4S18"]),
            (24, 24_000, &["VEC4S24"]),
            (30, 30_000, &["VEC4S30"]),
            (36, 36_000, &["VEC4S36"]),
            (48, 48_000, &["VEC4S48"]),
            (58, 58_006, &["VEC4S58"]),
        ],
    ),
    (
        "Duto",
        &[
            (12, 12_284, &["VEDAS12"]),
            (18, 19_108, &["VEDAS18"]),
            (24, 24_226, &["VEDAS24"]),
            (30, 30_709, &["VEDAS30"]),
            (36, 38_216, &["VEDAS36"]),
            (42, 43_675, &["VEDAS42"]),
            (48, 47_770, &["VEDAS48"]),
            (60, 54_000, &["VEDAS60"]),
            (76, 76_800, &["VEDAS76"]),
            (96, 96_000, &["VEDAS96"]),
        ],
    ),
    ("Piso Teto", &[]),
];

const DAIKIN_EVAPORATORS: [(&str, Evaps); 5] = [
    (
        "Hi Wall",
        &[
            (7, 20, &["FXAQ20", "VEWD7"]),
            (9, 25, &["FXAQ25", "VEWD9"]),
            (12, 32, &["FXAQ32", "VEWD12"]),
            (15, 40, &["FXAQ40", "VEWD15"]),
            (18, 50, &["FXAQ50", "VEWD18"]),
            (24, 63, &["FXAQ63", "VEWD24"]),
        ],
    ),
    (
        "1 Via",
        &[
            (7, 20, &["FXEQ20", "VEC1D7"]),
            (9, 25, &["FXEQ25", "VEC1D9"]),
            (12, 32, &["FXEQ32", "VEC1D12"]),
            (15, 40, &["FXEQ40", "VEC1D15"]),
            (18, 50, &["FXEQ50", "VEC1D18"]),
            (24, 63, &["FXEQ63", "VEC1D24"]),
        ],
    ),
    (
        "4 Vias",
        &[
            (7, 20, &["FXFQ20", "VEC4D7"]),
            (9, 25, &["FXFQ25", "VEC4D9"]),
            (12, 32, &["FXFQ32", "VEC4D12"]),
            (15, 40, &["FXFQ40", "VEC4D15"]),
            (18, 50, &["FXFQ50", "VEC4D18"]),
            (24, 63, &["FXFQ63", "VEC4D24"]),
            (30, 80, &["FXFQ80", "VEC4D30"]),
            (36, 100, &["FXFQ100", "VEC4D36"]),
            (47, 125, &["FXFQ125", "VEC4D47"]),
            (54, 140, &["FXFQ140", "VEC4D54"]),
        ],
    ),
    (
        "Duto",
        &[
            (7, 20, &["FXSQ20", "VEDAD7"]),
            (9, 25, &["FXSQ25", "VEDAD9"]),
            (12, 32, &["FXSQ32", "VEDAD12"]),
            (15, 40, &["FXSQ40", "VEDAD15"]),
            (18, 50, &["FXSQ50", "VEDAD50"]),
            (24, 63, &["FXSQ63", "VEDAD63"]),
            (30, 80, &["FXSQ80", "VEDAD80"]),
            (36, 100, &["FXSQ100", "VEDAD100"]),
            (48, 125, &["FXSQ125", "VEDAD125"]),
            (54, 140, &["FXSQ140", "VEDAD140"]),
        ],
    ),
    (
        "Piso Teto",
        &[
            (12, 32, &["FXHQ32", "VEPTD12"]),
            (24, 63, &["FXHQ63", "VEPTD24"]),
            (36, 100, &["FXHQ100", "VEPTD36"]),
            (48, 125, &["FXHQ125", "VEPTD48"]),
            (54, 140, &["FXHQ140", "VEPTD54"]),
        ],
    ),
];

/// Condenser rows: name, nominal, max.
type Conds = &'static [(&'static str, u32, u32)];

const SAMSUNG_VERTICAL: Conds = &[
    ("Samsung VRF 8HP", 76_432, 85_000),
    ("Samsung VRF 10HP", 95_540, 105_000),
    ("Samsung VRF 12HP", 114_648, 125_000),
    ("Samsung VRF 14HP", 133_756, 145_000),
    ("Samsung VRF 16HP", 152_864, 165_000),
    ("Samsung VRF 18HP", 171_972, 185_000),
    ("Samsung VRF 20HP", 191_080, 205_000),
];

const SAMSUNG_HORIZONTAL: Conds = &[
    ("Samsung VRF H 4HP", 41_287, 45_000),
    ("Samsung VRF H 5HP", 47_770, 52_000),
    ("Samsung VRF H 6HP", 52_888, 58_000),
    ("Samsung VRF H 7HP", 61_760, 68_000),
    ("Samsung VRF H 8HP", 76_432, 85_000),
    ("Samsung VRF H 10HP", 95_540, 105_000),
    ("Samsung VRF H 12HP", 114_648, 125_000),
    ("Samsung VRF H 14HP", 136_486, 150_000),
];

const DAIKIN_VERTICAL: Conds = &[
    ("Daikin VRV IV 8HP", 200, 220),
    ("Daikin VRV IV 10HP", 250, 275),
    ("Daikin VRV IV 12HP", 300, 330),
    ("Daikin VRV IV 14HP", 350, 385),
    ("Daikin VRV IV 16HP", 400, 440),
    ("Daikin VRV IV 18HP", 450, 495),
    ("Daikin VRV IV 20HP", 500, 550),
];

const DAIKIN_HORIZONTAL: Conds = &[
    ("Daikin VRF 3HP", 72, 80),
    ("Daikin VRF 4HP", 100, 110),
    ("Daikin VRF 5HP", 125, 138),
    ("Daikin VRF 6HP", 150, 165),
    ("Daikin VRV H 8HP", 200, 220),
    ("Daikin VRV H 10HP 220V", 223, 245),
    ("Daikin VRV H 10HP 380V", 250, 275),
    ("Daikin VRV H 12HP", 300, 330),
];

const SAMSUNG_CEILING: f64 = 1.45;
const DAIKIN_CEILING: f64 = 1.30;

pub(super) fn catalog() -> Catalog {
    let mut multi_split = BTreeMap::new();

    multi_split.insert(
        Brand::Lg,
        LG_MODELS
            .iter()
            .map(|&(name, nominal, max, ports)| {
                MultiSplitModel::generated_unchecked(Brand::Lg, name.to_owned(), nominal, max, ports)
            })
            .collect(),
    );

    multi_split.insert(
        Brand::Samsung,
        vec![
            listed(Brand::Samsung, "Samsung 18", 18, 30, &[SAMSUNG_18]),
            listed(Brand::Samsung, "Samsung 24", 24, 39, &[SAMSUNG_24]),
            listed(Brand::Samsung, "Samsung 28", 28, 48, &[SAMSUNG_28]),
        ],
    );

    multi_split.insert(
        Brand::Daikin,
        vec![
            listed(Brand::Daikin, "Daikin 18 Bi", 18, 24, &[DAIKIN_18_BI]),
            listed(Brand::Daikin, "Daikin 18 Tri", 18, 30, &[DAIKIN_18_TRI]),
            listed(Brand::Daikin, "Daikin 24", 24, 38, &[DAIKIN_TIER_24]),
            listed(Brand::Daikin, "Daikin 28", 28, 45, &[DAIKIN_TIER_24, DAIKIN_TIER_28]),
            listed(
                Brand::Daikin,
                "Daikin 34",
                34,
                54,
                &[DAIKIN_TIER_24, DAIKIN_TIER_28, DAIKIN_TIER_34],
            ),
            listed(
                Brand::Daikin,
                "Daikin 38",
                38,
                60,
                &[DAIKIN_TIER_24, DAIKIN_TIER_28, DAIKIN_TIER_34, DAIKIN_TIER_38],
            ),
        ],
    );

    let mut vrf = BTreeMap::new();
    vrf.insert(
        Brand::Samsung,
        section(
            SAMSUNG_CEILING,
            &SAMSUNG_EVAPORATORS,
            SAMSUNG_VERTICAL,
            SAMSUNG_HORIZONTAL,
        ),
    );
    vrf.insert(
        Brand::Daikin,
        section(
            DAIKIN_CEILING,
            &DAIKIN_EVAPORATORS,
            DAIKIN_VERTICAL,
            DAIKIN_HORIZONTAL,
        ),
    );

    Catalog { multi_split, vrf }
}

fn listed(brand: Brand, name: &str, nominal: u32, max: u32, tiers: &[Combos]) -> MultiSplitModel {
    let keys = tiers
        .iter()
        .flat_map(|tier| tier.iter())
        .map(|combo| CombinationKey::new(combo.iter().copied()));
    MultiSplitModel::listed_unchecked(brand, name.to_owned(), nominal, max, keys)
}

fn section(
    ceiling: f64,
    evaporators: &[(&str, Evaps)],
    vertical: Conds,
    horizontal: Conds,
) -> VrfSection {
    let evaporators = evaporators
        .iter()
        .map(|&(kind, rows)| EvaporatorGroup {
            kind: kind.to_owned(),
            entries: rows
                .iter()
                .map(|&(nominal, real, codes)| EvaporatorEntry {
                    nominal,
                    real,
                    codes: codes.iter().map(|&c| c.to_owned()).collect(),
                })
                .collect(),
        })
        .collect();

    let bucket = |rows: Conds| -> Vec<CondenserEntry> {
        rows.iter()
            .map(|&(name, nominal, max)| CondenserEntry {
                name: name.to_owned(),
                nominal,
                max,
            })
            .collect()
    };

    let mut condensers = BTreeMap::new();
    condensers.insert(Orientation::Vertical, bucket(vertical));
    condensers.insert(Orientation::Horizontal, bucket(horizontal));

    VrfSection {
        simultaneity_ceiling: ceiling,
        evaporators,
        condensers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_brand_has_multi_split_models() {
        let catalog = catalog();
        for brand in Brand::ALL {
            assert!(!catalog.multi_split_models(brand).unwrap().is_empty());
        }
    }

    #[test]
    fn daikin_tiers_accumulate() {
        let catalog = catalog();
        let models = catalog.multi_split_models(Brand::Daikin).unwrap();
        let d24 = &models[2];
        let d38 = &models[5];
        assert_eq!(d24.name(), "Daikin 24");
        assert_eq!(d38.name(), "Daikin 38");
        assert!(d24.combinations().is_subset(d38.combinations()));
        assert!(d38.supports(&CombinationKey::new([24, 24])));
        assert!(!d24.supports(&CombinationKey::new([24, 24])));
    }

    #[test]
    fn daikin_28_drops_combinations_above_its_maximum() {
        let catalog = catalog();
        let d28 = &catalog.multi_split_models(Brand::Daikin).unwrap()[3];
        assert_eq!(d28.max(), 45);
        assert!(d28.supports(&CombinationKey::new([9, 12, 24])));
        assert!(!d28.supports(&CombinationKey::new([12, 12, 24])));
        assert!(d28.combinations().iter().all(|k| k.total() <= 45));
    }

    #[test]
    fn condenser_buckets_are_ascending() {
        let catalog = catalog();
        for brand in [Brand::Samsung, Brand::Daikin] {
            for orientation in [Orientation::Vertical, Orientation::Horizontal] {
                let list = catalog.condensers(brand, orientation).unwrap();
                assert!(!list.is_empty());
                assert!(list.windows(2).all(|w| w[0].nominal() <= w[1].nominal()));
                assert!(list.iter().all(|c| c.max() >= c.nominal()));
            }
        }
    }

    #[test]
    fn lg_has_no_vrf_section() {
        let catalog = catalog();
        assert!(catalog.condensers(Brand::Lg, Orientation::Vertical).is_err());
    }
}
