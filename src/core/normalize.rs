use crate::domain::model::{OrthologRecord, OrthologResult};
use crate::utils::text::decapitalize_value;
use serde_json::Value;

/// Keys ortholog records by decapitalized `Species` (`Mouse` -> `mouse`).
///
/// A later record with the same species replaces the earlier one. Records
/// without a string `Species` all land under `""`.
pub fn orthologs_by_species(records: Vec<OrthologRecord>) -> OrthologResult {
    let mut by_species = OrthologResult::new();

    for record in records {
        let key = decapitalize_value(record.species().unwrap_or(&Value::Null));
        if let Some(previous) = by_species.insert(key.clone(), record) {
            tracing::warn!(
                "Duplicate ortholog species '{}', replacing earlier record {:?}",
                key,
                previous.get("Symbol")
            );
        }
    }

    by_species
}
