use serde::{Deserialize, Serialize};

use crate::prompt::MediaType;
use crate::prompts_page::PageRequest;

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOption {
    #[default]
    Recent,
    MostViewed,
}

impl From<Option<&str>> for SortOption {
    fn from(value: Option<&str>) -> Self {
        value.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

/// The media type facet as it arrived in a URL.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MediaTypeFilter {
    Known(MediaType),
    /// Not a media type the gallery serves, so no prompt matches it.
    Unknown(String),
}

impl From<MediaType> for MediaTypeFilter {
    fn from(value: MediaType) -> Self {
        Self::Known(value)
    }
}

impl From<&str> for MediaTypeFilter {
    fn from(value: &str) -> Self {
        value
            .parse()
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unknown(value.to_string()))
    }
}

impl From<&MediaTypeFilter> for String {
    fn from(value: &MediaTypeFilter) -> Self {
        match value {
            MediaTypeFilter::Known(media_type) => media_type.to_string(),
            MediaTypeFilter::Unknown(raw) => raw.clone(),
        }
    }
}

/// Facets selected by a gallery visitor.
///
/// Slugs within one facet are alternatives; facets combine with AND.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PromptFilters {
    pub media_type: Option<MediaTypeFilter>,
    pub model_slugs: Vec<String>,
    pub category_slugs: Vec<String>,
    pub search: Option<String>,
    pub sort: SortOption,
}

impl PromptFilters {
    /// Search text with surrounding whitespace removed, `None` when blank.
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn toggle_model(&mut self, slug: &str) {
        toggle(&mut self.model_slugs, slug);
    }

    pub fn toggle_category(&mut self, slug: &str) {
        toggle(&mut self.category_slugs, slug);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn from_query_string(query: &str) -> Self {
        serde_urlencoded::from_str::<FilterQuery>(query)
            .map(Self::from)
            .unwrap_or_default()
    }

    /// Encodes the filters as a shareable query string. Default values are
    /// left out, and so is the first page.
    pub fn to_query_string(&self, page: PageRequest) -> String {
        let query = FilterQuery::from(self);
        let mut pairs: Vec<(&str, String)> = vec![];

        if let Some(search) = query.search {
            pairs.push(("search", search));
        }
        if let Some(media_type) = query.media_type {
            pairs.push(("mediaType", media_type));
        }
        if let Some(models) = query.models {
            pairs.push(("models", models));
        }
        if let Some(categories) = query.categories {
            pairs.push(("categories", categories));
        }
        if let Some(sort) = query.sort {
            pairs.push(("sort", sort));
        }
        if page.number() > 1 {
            pairs.push(("page", page.number().to_string()));
        }

        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

fn toggle(slugs: &mut Vec<String>, slug: &str) {
    if let Some(index) = slugs.iter().position(|s| s == slug) {
        slugs.remove(index);
    } else {
        slugs.push(slug.to_string());
    }
}

/// The flat key/value shape filters take in a URL.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub search: Option<String>,
    pub media_type: Option<String>,
    pub models: Option<String>,
    pub categories: Option<String>,
    pub sort: Option<String>,
}

impl From<FilterQuery> for PromptFilters {
    fn from(value: FilterQuery) -> Self {
        Self {
            media_type: value
                .media_type
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(MediaTypeFilter::from),
            model_slugs: split_slugs(value.models.as_deref()),
            category_slugs: split_slugs(value.categories.as_deref()),
            search: value.search.filter(|s| !s.trim().is_empty()),
            sort: SortOption::from(value.sort.as_deref()),
        }
    }
}

impl From<&PromptFilters> for FilterQuery {
    fn from(value: &PromptFilters) -> Self {
        Self {
            search: value.search_text().map(str::to_string),
            media_type: value.media_type.as_ref().map(String::from),
            models: join_slugs(&value.model_slugs),
            categories: join_slugs(&value.category_slugs),
            sort: (value.sort != SortOption::default())
                .then(|| value.sort.to_string()),
        }
    }
}

fn split_slugs(joined: Option<&str>) -> Vec<String> {
    let mut slugs: Vec<String> = vec![];
    for slug in joined.unwrap_or_default().split(',').map(str::trim) {
        if !slug.is_empty() && !slugs.iter().any(|s| s == slug) {
            slugs.push(slug.to_string());
        }
    }
    slugs
}

fn join_slugs(slugs: &[String]) -> Option<String> {
    (!slugs.is_empty()).then(|| slugs.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_gallery_query_string() {
        let filters = PromptFilters::from_query_string(
            "search=neon&mediaType=video&models=sora,,veo&categories=anime&sort=most_viewed&page=3",
        );

        assert_eq!(
            filters,
            PromptFilters {
                media_type: Some(MediaType::Video.into()),
                model_slugs: vec!["sora".to_string(), "veo".to_string()],
                category_slugs: vec!["anime".to_string()],
                search: Some("neon".to_string()),
                sort: SortOption::MostViewed,
            }
        );
    }

    #[test]
    fn unknown_sort_and_blank_values_fall_back_to_defaults() {
        let filters = PromptFilters::from_query_string(
            "mediaType=&sort=random&search=",
        );

        assert_eq!(filters, PromptFilters::default());
    }

    #[test]
    fn unknown_media_type_is_kept_as_a_filter() {
        let filters = PromptFilters::from_query_string("mediaType=hologram");

        assert_eq!(
            filters.media_type,
            Some(MediaTypeFilter::Unknown("hologram".to_string()))
        );
        assert_eq!(
            filters.to_query_string(PageRequest::default()),
            "mediaType=hologram"
        );
    }

    #[test]
    fn encodes_only_non_default_values() {
        let mut filters = PromptFilters::default();
        assert_eq!(filters.to_query_string(PageRequest::default()), "");

        filters.search = Some("ocean dream".to_string());
        filters.toggle_model("sora");
        filters.toggle_model("midjourney");
        filters.sort = SortOption::MostViewed;

        assert_eq!(
            filters.to_query_string(PageRequest::new(2)),
            "search=ocean+dream&models=sora%2Cmidjourney&sort=most_viewed&page=2"
        );
        assert_eq!(
            PromptFilters::from_query_string(
                &filters.to_query_string(PageRequest::new(2))
            ),
            filters
        );
    }

    #[test]
    fn toggling_twice_removes_the_slug() {
        let mut filters = PromptFilters::default();
        filters.toggle_category("anime");
        filters.toggle_category("portrait");
        filters.toggle_category("anime");

        assert_eq!(filters.category_slugs, vec!["portrait".to_string()]);

        filters.clear();
        assert_eq!(filters, PromptFilters::default());
    }

    #[test]
    fn blank_search_is_no_search() {
        let filters = PromptFilters {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.search_text(), None);

        let filters = PromptFilters {
            search: Some("  SORA ".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.search_text(), Some("SORA"));
    }
}
