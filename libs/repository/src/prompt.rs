use std::collections::HashMap;

use sea_orm::sea_query::{Expr, Func, LikeExpr, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::active_models::{prelude::*, *};
use crate::tag::into_tag_entities;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PromptRepository {
    db: DatabaseConnection,
}

impl PromptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<prompt::Model> for PromptEntity {
    fn from(value: prompt::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            prompt_text: value.prompt_text,
            thumbnail_url: value.thumbnail_url,
            media_url: value.media_url,
            media_type: MediaType::from(value.media_type),
            source_name: value.source_name,
            source_url: value.source_url,
            view_count: u64::try_from(value.view_count).unwrap_or_default(),
            is_featured: value.is_featured,
            additional_info: value.additional_info,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl PromptRepository {
    /// One page of prompts matching every facet in `filters`, with the exact
    /// number of matches across all pages.
    pub async fn find(
        &self,
        filters: &PromptFilters,
        page: PageRequest,
    ) -> anyhow::Result<PromptsPage> {
        let query = filtered(filters);

        let total = query.clone().count(&self.db).await?;

        let offset = page.offset().min(i64::MAX as u64);
        let prompts = sorted(query, filters.sort)
            .offset(offset)
            .limit(page.limit())
            .all(&self.db)
            .await?;

        let prompts = self.with_tags(prompts).await?;

        Ok(PromptsPage::new(prompts, total, page))
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<PromptWithTagsEntity>> {
        let prompt = Prompt::find_by_id(id.to_string()).one(&self.db).await?;

        let Some(prompt) = prompt else {
            return Ok(None);
        };

        Ok(self.with_tags(vec![prompt]).await?.pop())
    }

    async fn with_tags(
        &self,
        prompts: Vec<prompt::Model>,
    ) -> anyhow::Result<Vec<PromptWithTagsEntity>> {
        let ids: Vec<_> = prompts.iter().map(|x| x.id.clone()).collect();
        let mut tags = self.find_tags_by_prompt_ids(ids).await?;

        Ok(prompts
            .into_iter()
            .map(|prompt| {
                let tags = tags.remove(&prompt.id).unwrap_or_default();
                PromptWithTagsEntity::new(PromptEntity::from(prompt), tags)
            })
            .collect())
    }

    async fn find_tags_by_prompt_ids(
        &self,
        ids: Vec<String>,
    ) -> anyhow::Result<HashMap<String, Vec<TagEntity>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = PromptTag::find()
            .filter(prompt_tag::Column::PromptId.is_in(ids))
            .find_also_related(Tag)
            .order_by_asc(tag::Column::Name)
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await?;

        let mut results: HashMap<String, Vec<TagEntity>> = HashMap::new();
        for (link, tag) in links {
            let Some(tag) = into_tag_entities(tag).next() else {
                continue;
            };
            let tags = results.entry(link.prompt_id).or_default();
            if !tags.iter().any(|x| x.id == tag.id) {
                tags.push(tag);
            }
        }

        Ok(results)
    }
}

/// Applies the media type, search and tag facets. Ordering is left to
/// [`sorted`] so the same query can be counted.
fn filtered(filters: &PromptFilters) -> Select<Prompt> {
    let mut query = Prompt::find();

    if let Some(media_type) = &filters.media_type {
        query =
            query.filter(prompt::Column::MediaType.eq(String::from(media_type)));
    }

    if let Some(search) = filters.search_text() {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        query = query.filter(
            Condition::any()
                .add(contains_lowercase(prompt::Column::Title, &pattern))
                .add(contains_lowercase(prompt::Column::PromptText, &pattern)),
        );
    }

    for slugs in [&filters.model_slugs, &filters.category_slugs] {
        if !slugs.is_empty() {
            query =
                query.filter(prompt::Column::Id.in_subquery(tagged_with(slugs)));
        }
    }

    query
}

fn sorted(query: Select<Prompt>, sort: SortOption) -> Select<Prompt> {
    let query = match sort {
        SortOption::MostViewed => query
            .order_by_desc(prompt::Column::ViewCount)
            .order_by_desc(prompt::Column::CreatedAt),
        SortOption::Recent => query.order_by_desc(prompt::Column::CreatedAt),
    };

    query.order_by_desc(prompt::Column::Id)
}

// SQLite's LOWER only folds ASCII, so non-ASCII search is case-sensitive
// there. Postgres folds the full range.
fn contains_lowercase(
    column: prompt::Column,
    pattern: &str,
) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col((Prompt, column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

/// `SELECT prompt_id FROM prompt_tags JOIN tags ... WHERE slug IN (..)`
fn tagged_with(slugs: &[String]) -> SelectStatement {
    Query::select()
        .column((PromptTag, prompt_tag::Column::PromptId))
        .from(PromptTag)
        .inner_join(
            Tag,
            Expr::col((Tag, tag::Column::Id))
                .equals((PromptTag, prompt_tag::Column::TagId)),
        )
        .and_where(Expr::col((Tag, tag::Column::Slug)).is_in(slugs.to_vec()))
        .to_owned()
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
