use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::GeneDataError;

/// Organisms with a dedicated lookup endpoint on the REST backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Organism {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "mouse")]
    Mouse,
    #[serde(rename = "zebrafish")]
    Zebrafish,
    #[serde(rename = "rat")]
    Rat,
    #[serde(rename = "pig")]
    Pig,
    #[serde(rename = "c_elegans")]
    CElegans,
    #[serde(rename = "fruitFly")]
    FruitFly,
}

impl Organism {
    pub const ALL: [Organism; 7] = [
        Organism::Human,
        Organism::Mouse,
        Organism::Zebrafish,
        Organism::Rat,
        Organism::Pig,
        Organism::CElegans,
        Organism::FruitFly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Organism::Human => "human",
            Organism::Mouse => "mouse",
            Organism::Zebrafish => "zebrafish",
            Organism::Rat => "rat",
            Organism::Pig => "pig",
            Organism::CElegans => "c_elegans",
            Organism::FruitFly => "fruitFly",
        }
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organism {
    type Err = GeneDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organism::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| GeneDataError::InvalidConfigValueError {
                field: "organism".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown organism. Supported: {}",
                    Organism::ALL.map(|o| o.as_str()).join(", ")
                ),
            })
    }
}

/// One PubMed article as returned by an organism endpoint. Schema is owned upstream.
pub type Article = Value;

pub type PubMedTitles = Value;

pub type GwasResult = Value;

/// Result of the Melodi Presto ENRICH call after both decodes.
pub type EnrichResult = Value;

/// One element of the ortholog overview, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrthologRecord(pub Map<String, Value>);

impl OrthologRecord {
    /// Raw `Species` field, if the upstream sent one.
    pub fn species(&self) -> Option<&Value> {
        self.0.get("Species")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Ortholog records keyed by decapitalized species name.
pub type OrthologResult = BTreeMap<String, OrthologRecord>;

/// Target details requested from Pharos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Target development level (Tclin, Tchem, Tbio, Tdark)
    #[serde(default)]
    pub tdl: Option<String>,
    #[serde(default)]
    pub fam: Option<String>,
    #[serde(default)]
    pub novelty: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_organism_names_match_endpoint_spelling() {
        let names: Vec<&str> = Organism::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(
            names,
            vec!["human", "mouse", "zebrafish", "rat", "pig", "c_elegans", "fruitFly"]
        );
    }

    #[test]
    fn test_organism_parse() {
        assert_eq!("fruitFly".parse::<Organism>().unwrap(), Organism::FruitFly);
        assert_eq!("c_elegans".parse::<Organism>().unwrap(), Organism::CElegans);
        assert!("fruitfly".parse::<Organism>().is_err());
        assert!("dog".parse::<Organism>().is_err());
    }

    #[test]
    fn test_organism_serde_uses_canonical_names() {
        assert_eq!(serde_json::to_value(Organism::CElegans).unwrap(), json!("c_elegans"));
        let parsed: Organism = serde_json::from_value(json!("fruitFly")).unwrap();
        assert_eq!(parsed, Organism::FruitFly);
    }

    #[test]
    fn test_ortholog_record_is_transparent() {
        let raw = json!({"Species": "Mouse", "Symbol": "Brca1", "Score": null});
        let record: OrthologRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.species(), Some(&json!("Mouse")));
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_target_record_keeps_unknown_fields() {
        let target: TargetRecord = serde_json::from_value(json!({
            "name": "Breast cancer type 1 susceptibility protein",
            "tdl": "Tchem",
            "fam": null,
            "novelty": 0.0012,
            "sym": "BRCA1"
        }))
        .unwrap();
        assert_eq!(target.tdl.as_deref(), Some("Tchem"));
        assert_eq!(target.fam, None);
        assert_eq!(target.extra.get("sym"), Some(&json!("BRCA1")));
    }
}
