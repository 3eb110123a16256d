use std::collections::HashSet;

use models::{errors::ModelError, location};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationView {
    pub id: i32,
    pub name: String,
}

impl From<location::Model> for LocationView {
    fn from(m: location::Model) -> Self { Self { id: m.id, name: m.name } }
}

/// Validate and trim location names, dropping duplicates but keeping order.
pub fn normalize_names(names: &[String]) -> Result<Vec<String>, ModelError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for raw in names {
        let name = location::validate_name(raw)?;
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }
    Ok(out)
}
