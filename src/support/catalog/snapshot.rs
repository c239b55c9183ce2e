//! Serializable form of the product catalog.
//!
//! The admin layer keeps catalog rows in an external store. A snapshot of
//! those rows is deserialized into these records and validated into a
//! [`Catalog`]. The conversion is the only place catalog invariants are checked.

use std::collections::{BTreeMap, btree_map::Entry};

use serde::{Deserialize, Serialize};

use crate::support::{
    combination::CombinationKey,
    constraint::{Constrained, StrictlyPositive},
};

use super::{
    Brand, Catalog, CatalogError, CondenserEntry, EvaporatorEntry, EvaporatorGroup,
    MultiSplitModel, Orientation, ProductLine, vrf::VrfSection,
};

/// Complete catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Multi-Split condenser models, in presentation order.
    #[serde(default)]
    pub multi_split: Vec<MultiSplitRecord>,

    /// VRF sections, one per brand.
    #[serde(default)]
    pub vrf: Vec<VrfRecord>,
}

/// A Multi-Split condenser model row.
///
/// Models with `combinations` use that list verbatim. Models without one
/// generate every combination allowed by `max_evaporators` and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSplitRecord {
    pub brand: Brand,
    pub name: String,
    pub nominal: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_evaporators: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinations: Option<Vec<Vec<u32>>>,
}

/// A brand's VRF section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfRecord {
    pub brand: Brand,

    /// Brand reference simultaneity ceiling, as a ratio (e.g. `1.45`).
    pub simultaneity_ceiling: f64,

    #[serde(default)]
    pub evaporators: Vec<EvaporatorGroupRecord>,

    /// Condensers in ascending nominal order within each orientation.
    #[serde(default)]
    pub condensers: Vec<CondenserRecord>,
}

/// Evaporators of one equipment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporatorGroupRecord {
    pub kind: String,
    #[serde(default)]
    pub entries: Vec<EvaporatorRecord>,
}

/// A single evaporator size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporatorRecord {
    pub nominal: u32,
    pub real: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
}

/// A VRF condenser row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondenserRecord {
    pub orientation: Orientation,
    pub name: String,
    pub nominal: u32,
    pub max: u32,
}

impl TryFrom<CatalogSnapshot> for Catalog {
    type Error = CatalogError;

    fn try_from(snapshot: CatalogSnapshot) -> Result<Self, Self::Error> {
        let mut multi_split: BTreeMap<Brand, Vec<MultiSplitModel>> = BTreeMap::new();
        for record in snapshot.multi_split {
            let brand = record.brand;
            multi_split
                .entry(brand)
                .or_default()
                .push(record.try_into()?);
        }

        let mut vrf = BTreeMap::new();
        for record in snapshot.vrf {
            let brand = record.brand;
            let section = VrfSection::try_from(record)?;
            match vrf.entry(brand) {
                Entry::Vacant(slot) => {
                    slot.insert(section);
                }
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateBrand {
                        line: ProductLine::Vrf,
                        brand,
                    });
                }
            }
        }

        Ok(Catalog { multi_split, vrf })
    }
}

impl TryFrom<MultiSplitRecord> for MultiSplitModel {
    type Error = CatalogError;

    fn try_from(record: MultiSplitRecord) -> Result<Self, Self::Error> {
        let nominal = positive(&record.name, "nominal", record.nominal)?;
        let max = positive(&record.name, "max", record.max)?;

        match (record.combinations, record.max_evaporators) {
            (Some(lists), _) => MultiSplitModel::listed(
                record.brand,
                record.name,
                nominal,
                max,
                lists.into_iter().map(CombinationKey::new),
            ),
            (None, Some(max_evaporators)) => MultiSplitModel::generated(
                record.brand,
                record.name,
                nominal,
                max,
                max_evaporators,
            ),
            (None, None) => Err(CatalogError::MissingCombinations { item: record.name }),
        }
    }
}

impl TryFrom<VrfRecord> for VrfSection {
    type Error = CatalogError;

    fn try_from(record: VrfRecord) -> Result<Self, Self::Error> {
        let brand = record.brand;
        let ceiling = Constrained::<f64, StrictlyPositive>::new(record.simultaneity_ceiling)
            .map_err(|err| CatalogError::invalid(brand.name(), "simultaneity_ceiling", err))?;

        let evaporators = record
            .evaporators
            .into_iter()
            .map(|group| -> Result<EvaporatorGroup, CatalogError> {
                let entries = group
                    .entries
                    .into_iter()
                    .map(|entry| -> Result<EvaporatorEntry, CatalogError> {
                        let item = format!("{} {} ({brand})", group.kind, entry.nominal);
                        Ok(EvaporatorEntry {
                            nominal: positive(&item, "nominal", entry.nominal)?.into_inner(),
                            real: positive(&item, "real", entry.real)?.into_inner(),
                            codes: entry.codes,
                        })
                    })
                    .collect::<Result<Vec<_>, CatalogError>>()?;
                Ok(EvaporatorGroup {
                    kind: group.kind,
                    entries,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let mut condensers: BTreeMap<Orientation, Vec<CondenserEntry>> = BTreeMap::new();
        for row in record.condensers {
            let nominal = positive(&row.name, "nominal", row.nominal)?.into_inner();
            let max = positive(&row.name, "max", row.max)?.into_inner();
            if max < nominal {
                return Err(CatalogError::MaxBelowNominal {
                    item: row.name,
                    nominal,
                    max,
                });
            }

            let bucket = condensers.entry(row.orientation).or_default();
            if bucket.last().is_some_and(|prev| prev.nominal > nominal) {
                return Err(CatalogError::UnorderedCondensers {
                    brand,
                    orientation: row.orientation,
                    item: row.name,
                });
            }
            bucket.push(CondenserEntry {
                name: row.name,
                nominal,
                max,
            });
        }

        Ok(VrfSection {
            simultaneity_ceiling: ceiling.into_inner(),
            evaporators,
            condensers,
        })
    }
}

impl From<&Catalog> for CatalogSnapshot {
    fn from(catalog: &Catalog) -> Self {
        let multi_split = catalog
            .multi_split
            .values()
            .flatten()
            .map(|model| MultiSplitRecord {
                brand: model.brand(),
                name: model.name().to_owned(),
                nominal: model.nominal(),
                max: model.max(),
                max_evaporators: model.is_generated().then_some(model.max_evaporators()),
                combinations: (!model.is_generated()).then(|| {
                    model
                        .combinations()
                        .iter()
                        .map(|key| key.values().to_vec())
                        .collect()
                }),
            })
            .collect();

        let vrf = catalog
            .vrf
            .iter()
            .map(|(&brand, section)| VrfRecord {
                brand,
                simultaneity_ceiling: section.simultaneity_ceiling,
                evaporators: section
                    .evaporators
                    .iter()
                    .map(|group| EvaporatorGroupRecord {
                        kind: group.kind.clone(),
                        entries: group
                            .entries
                            .iter()
                            .map(|entry| EvaporatorRecord {
                                nominal: entry.nominal,
                                real: entry.real,
                                codes: entry.codes.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
                condensers: section
                    .condensers
                    .iter()
                    .flat_map(|(&orientation, bucket)| {
                        bucket.iter().map(move |c| CondenserRecord {
                            orientation,
                            name: c.name.clone(),
                            nominal: c.nominal,
                            max: c.max,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { multi_split, vrf }
    }
}

fn positive(
    item: &str,
    field: &'static str,
    value: u32,
) -> Result<Constrained<u32, StrictlyPositive>, CatalogError> {
    StrictlyPositive::new(value).map_err(|err| CatalogError::invalid(item, field, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    const SNAPSHOT: &str = r#"{
        "multi_split": [
            { "brand": "LG", "name": "LG 18", "nominal": 18, "max": 24, "max_evaporators": 2 },
            { "brand": "samsung", "name": "Samsung 18", "nominal": 18, "max": 30,
              "combinations": [[7, 7], [9, 12], [12, 18]] }
        ],
        "vrf": [
            {
                "brand": "daikin",
                "simultaneity_ceiling": 1.3,
                "evaporators": [
                    { "kind": "Hi Wall", "entries": [
                        { "nominal": 9, "real": 25, "codes": ["FXAQ25", "VEWD9"] }
                    ] },
                    { "kind": "Piso Teto" }
                ],
                "condensers": [
                    { "orientation": "horizontal", "name": "Daikin VRF 3HP", "nominal": 72, "max": 80 },
                    { "orientation": "horizontal", "name": "Daikin VRF 4HP", "nominal": 100, "max": 110 }
                ]
            }
        ]
    }"#;

    #[test]
    fn loads_store_snapshot() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();

        let lg = catalog.multi_split_models(Brand::Lg).unwrap();
        assert_eq!(lg.len(), 1);
        assert!(lg[0].is_generated());
        assert!(lg[0].supports(&CombinationKey::new([9, 12])));

        let samsung = catalog.multi_split_models(Brand::Samsung).unwrap();
        assert_eq!(samsung[0].combinations().len(), 3);

        assert_eq!(
            catalog.evaporator_real(Brand::Daikin, "hi wall", 9).unwrap(),
            Some(25)
        );
        assert!(catalog.evaporators(Brand::Daikin, "Piso Teto").unwrap().is_empty());
        assert_eq!(
            catalog
                .condensers(Brand::Daikin, Orientation::Horizontal)
                .unwrap()
                .len(),
            2
        );
        assert!(
            catalog
                .condensers(Brand::Daikin, Orientation::Vertical)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn missing_brand_sections_are_errors() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();

        assert!(matches!(
            catalog.multi_split_models(Brand::Daikin),
            Err(CatalogError::MissingBrand {
                line: ProductLine::MultiSplit,
                brand: Brand::Daikin
            })
        ));
        assert!(matches!(
            catalog.condensers(Brand::Samsung, Orientation::Vertical),
            Err(CatalogError::MissingBrand {
                line: ProductLine::Vrf,
                brand: Brand::Samsung
            })
        ));
    }

    #[test]
    fn rejects_unordered_condensers() {
        let snapshot = CatalogSnapshot {
            multi_split: vec![],
            vrf: vec![VrfRecord {
                brand: Brand::Samsung,
                simultaneity_ceiling: 1.45,
                evaporators: vec![],
                condensers: vec![
                    CondenserRecord {
                        orientation: Orientation::Vertical,
                        name: "Samsung VRF 10HP".into(),
                        nominal: 95_540,
                        max: 105_000,
                    },
                    CondenserRecord {
                        orientation: Orientation::Vertical,
                        name: "Samsung VRF 8HP".into(),
                        nominal: 76_432,
                        max: 85_000,
                    },
                ],
            }],
        };

        let err = Catalog::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, CatalogError::UnorderedCondensers { .. }));
    }

    #[test]
    fn rejects_invalid_values() {
        let mut snapshot = CatalogSnapshot::default();
        snapshot.vrf.push(VrfRecord {
            brand: Brand::Daikin,
            simultaneity_ceiling: 0.0,
            evaporators: vec![],
            condensers: vec![],
        });
        assert!(matches!(
            Catalog::from_snapshot(snapshot).unwrap_err(),
            CatalogError::InvalidValue {
                field: "simultaneity_ceiling",
                source: ConstraintError::Zero,
                ..
            }
        ));

        let mut snapshot = CatalogSnapshot::default();
        snapshot.multi_split.push(MultiSplitRecord {
            brand: Brand::Lg,
            name: "LG 0".into(),
            nominal: 0,
            max: 24,
            max_evaporators: Some(2),
            combinations: None,
        });
        assert!(matches!(
            Catalog::from_snapshot(snapshot).unwrap_err(),
            CatalogError::InvalidValue {
                field: "nominal",
                ..
            }
        ));
    }

    #[test]
    fn rejects_model_without_combinations() {
        let mut snapshot = CatalogSnapshot::default();
        snapshot.multi_split.push(MultiSplitRecord {
            brand: Brand::Samsung,
            name: "Samsung 34".into(),
            nominal: 34,
            max: 54,
            max_evaporators: None,
            combinations: None,
        });
        assert!(matches!(
            Catalog::from_snapshot(snapshot).unwrap_err(),
            CatalogError::MissingCombinations { .. }
        ));
    }

    #[test]
    fn rejects_oversized_port_count() {
        let json = r#"{
            "multi_split": [
                { "brand": "LG", "name": "LG 18", "nominal": 18, "max": 24,
                  "max_evaporators": 18446744073709551615 }
            ],
            "vrf": []
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::TooManyEvaporators { limit: 5, .. })
        ));
    }

    #[test]
    fn listed_combination_at_integer_limit_is_dropped() {
        let json = r#"{
            "multi_split": [
                { "brand": "samsung", "name": "Samsung 18", "nominal": 18, "max": 30,
                  "combinations": [[4294967295, 9], [9, 12]] }
            ],
            "vrf": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let samsung = catalog.multi_split_models(Brand::Samsung).unwrap();
        assert_eq!(samsung[0].combinations().len(), 1);
        assert!(samsung[0].supports(&CombinationKey::new([12, 9])));
    }

    #[test]
    fn rejects_duplicate_vrf_sections() {
        let section = VrfRecord {
            brand: Brand::Daikin,
            simultaneity_ceiling: 1.3,
            evaporators: vec![],
            condensers: vec![],
        };
        let snapshot = CatalogSnapshot {
            multi_split: vec![],
            vrf: vec![section.clone(), section],
        };
        assert!(matches!(
            Catalog::from_snapshot(snapshot).unwrap_err(),
            CatalogError::DuplicateBrand {
                line: ProductLine::Vrf,
                brand: Brand::Daikin
            }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn builtin_catalog_survives_export_and_validation() {
        let builtin = Catalog::builtin();
        let json = serde_json::to_string(&builtin.snapshot()).unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();
        assert_eq!(reloaded, builtin);
    }
}
