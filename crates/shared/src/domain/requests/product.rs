use crate::model::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
        }
    }
}

/// Product listing filters. `to_query_pairs` is the single place where the
/// filter state is synchronized into the request query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindAllProducts {
    pub category: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub size: Option<Size>,

    #[serde(default)]
    pub brands: Vec<String>,

    #[serde(default)]
    pub sort: SortOrder,

    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            category: None,
            kind: None,
            size: None,
            brands: Vec::new(),
            sort: SortOrder::default(),
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl FindAllProducts {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }

        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }

        if let Some(size) = self.size {
            pairs.push(("size", size.as_str().to_string()));
        }

        for brand in &self.brands {
            pairs.push(("brands[]", brand.clone()));
        }

        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_repeat_brands_and_skip_unset_filters() {
        let filters = FindAllProducts {
            category: Some("men".to_string()),
            brands: vec!["Aran".to_string(), "Shetland".to_string()],
            sort: SortOrder::PriceLow,
            ..FindAllProducts::default()
        };

        let pairs = filters.to_query_pairs();

        assert!(pairs.contains(&("category", "men".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "type"));
        assert_eq!(
            pairs
                .iter()
                .filter(|(key, _)| *key == "brands[]")
                .map(|(_, value)| value.as_str())
                .collect::<Vec<_>>(),
            vec!["Aran", "Shetland"],
        );
        assert!(pairs.contains(&("sort", "price-low".to_string())));
        assert!(pairs.contains(&("page", "1".to_string())));
    }
}
