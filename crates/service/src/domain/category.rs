use models::category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
}

impl From<category::Model> for CategoryView {
    fn from(m: category::Model) -> Self { Self { id: m.id, name: m.name } }
}

/// Body of create and update; update replaces the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}
