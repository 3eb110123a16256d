use models::{ad, category, user};
use serde::{Deserialize, Serialize};

/// Ad as exposed over HTTP: author and category by slug, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdView {
    pub id: i32,
    pub name: String,
    pub author: Option<String>,
    pub price: i32,
    pub description: Option<String>,
    pub is_published: bool,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl AdView {
    pub fn new(m: ad::Model, author: Option<user::Model>, category: Option<category::Model>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            author: author.map(|u| u.username),
            price: m.price,
            description: m.description,
            is_published: m.is_published,
            image: m.image,
            category: category.map(|c| c.name),
        }
    }
}

/// `author` is a username, `category` a category name.
#[derive(Debug, Clone, Deserialize)]
pub struct AdCreateInput {
    pub name: String,
    pub author: String,
    pub price: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update. For the nullable fields an absent key leaves the value alone
/// (`None`) while an explicit `null` clears it (`Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdUpdateInput {
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub is_published: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::AdUpdateInput;

    #[test]
    fn null_clears_and_absent_keeps() {
        let input: AdUpdateInput =
            serde_json::from_str(r#"{"category": null, "description": "mint"}"#).unwrap();
        assert_eq!(input.category, Some(None));
        assert_eq!(input.description, Some(Some("mint".to_string())));
        assert_eq!(input.image, None);

        let input: AdUpdateInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.category, None);
        assert_eq!(input.description, None);
    }
}
