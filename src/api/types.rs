use serde::{Deserialize, Serialize};

/// Sort orders accepted by the activity listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySort {
    MostReviewed,
    PriceAsc,
    PriceDesc,
    Latest,
}

/// Filter and paging for the activity listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityQuery {
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub sort: Option<ActivitySort>,
    pub page: u32,
    pub size: u32,
}

impl ActivityQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("method", "offset".to_string()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(keyword) = &self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(sort) = self.sort {
            let sort = match sort {
                ActivitySort::MostReviewed => "most_reviewed",
                ActivitySort::PriceAsc => "price_asc",
                ActivitySort::PriceDesc => "price_desc",
                ActivitySort::Latest => "latest",
            };
            params.push(("sort", sort.to_string()));
        }
        params
    }
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self {
            category: None,
            keyword: None,
            sort: None,
            page: 1,
            size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_offset_page() {
        let params = ActivityQuery::default().to_params();
        assert_eq!(
            params,
            vec![
                ("method", "offset".to_string()),
                ("page", "1".to_string()),
                ("size", "20".to_string()),
            ]
        );
    }

    #[test]
    fn optional_filters_are_appended() {
        let query = ActivityQuery {
            category: Some("투어".to_string()),
            keyword: Some("서핑".to_string()),
            sort: Some(ActivitySort::PriceAsc),
            page: 2,
            size: 8,
        };
        let params = query.to_params();
        assert!(params.contains(&("category", "투어".to_string())));
        assert!(params.contains(&("keyword", "서핑".to_string())));
        assert!(params.contains(&("sort", "price_asc".to_string())));
    }
}
