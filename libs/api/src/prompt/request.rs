use entity::prelude::*;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Gallery filters in their shareable query-string form.
#[derive(Deserialize, ToSchema, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPromptsParam {
    /// Substring of the title or prompt text, case-insensitive
    pub search: Option<String>,
    /// `image` or `video`
    pub media_type: Option<String>,
    /// Comma-separated model tag slugs
    pub models: Option<String>,
    /// Comma-separated category tag slugs
    pub categories: Option<String>,
    /// `recent` (default) or `most_viewed`
    pub sort: Option<String>,
    /// 1-based page number, 12 prompts per page. Anything that is not a
    /// positive integer reads as the first page.
    pub page: Option<String>,
}

impl GetPromptsParam {
    pub fn into_filters(self) -> (PromptFilters, PageRequest) {
        let page = self
            .page
            .and_then(|page| page.trim().parse::<u64>().ok())
            .map(PageRequest::new)
            .unwrap_or_default();
        let filters = PromptFilters::from(FilterQuery {
            search: self.search,
            media_type: self.media_type,
            models: self.models,
            categories: self.categories,
            sort: self.sort,
        });

        (filters, page)
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostViewRequest {
    /// Opaque token identifying one browsing session
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn parse(uri: &str) -> (PromptFilters, PageRequest) {
        let uri: Uri = uri.parse().unwrap();
        let Query(params) =
            Query::<GetPromptsParam>::try_from_uri(&uri).unwrap();
        params.into_filters()
    }

    #[test]
    fn reads_every_facet_from_the_query_string() {
        let (filters, page) = parse(
            "/prompts?search=neon&mediaType=video&models=sora,veo&categories=anime&sort=most_viewed&page=2",
        );

        assert_eq!(filters.media_type, Some(MediaType::Video.into()));
        assert_eq!(filters.model_slugs, vec!["sora", "veo"]);
        assert_eq!(filters.category_slugs, vec!["anime"]);
        assert_eq!(filters.search_text(), Some("neon"));
        assert_eq!(filters.sort, SortOption::MostViewed);
        assert_eq!(page, PageRequest::new(2));
    }

    #[test]
    fn missing_parameters_mean_first_page_of_everything() {
        let (filters, page) = parse("/prompts");

        assert_eq!(filters, PromptFilters::default());
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn page_zero_is_the_first_page() {
        let (_, page) = parse("/prompts?page=0");

        assert_eq!(page.number(), 1);
    }

    #[test]
    fn malformed_page_is_the_first_page() {
        for uri in ["/prompts?page=abc", "/prompts?page=-1", "/prompts?page="] {
            let (_, page) = parse(uri);

            assert_eq!(page, PageRequest::default(), "{uri}");
        }
    }
}
