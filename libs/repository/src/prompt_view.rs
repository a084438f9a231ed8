use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    prelude::Uuid, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PromptViewRepository {
    db: DatabaseConnection,
}

impl PromptViewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<prompt_view::Model> for PromptViewEntity {
    fn from(value: prompt_view::Model) -> Self {
        Self {
            id: value.id,
            prompt_id: value.prompt_id,
            session_id: value.session_id,
            viewed_at: value.viewed_at.and_utc(),
        }
    }
}

impl PromptViewRepository {
    /// Records a view of `prompt_id` for `session_id` and bumps the prompt's
    /// view count, at most once per pair.
    ///
    /// Returns whether this call was the one that counted. Fails with
    /// [`DbErr::RecordNotFound`] when the prompt does not exist.
    pub async fn record(
        &self,
        prompt_id: &str,
        session_id: &str,
    ) -> anyhow::Result<bool> {
        let txn = self.db.begin().await?;

        let view = prompt_view::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            prompt_id: ActiveValue::Set(prompt_id.to_string()),
            session_id: ActiveValue::Set(Some(session_id.to_string())),
            viewed_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let inserted = PromptView::insert(view)
            .on_conflict(
                OnConflict::columns([
                    prompt_view::Column::PromptId,
                    prompt_view::Column::SessionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        if inserted == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        let updated = Prompt::update_many()
            .col_expr(
                prompt::Column::ViewCount,
                Expr::col(prompt::Column::ViewCount).add(1),
            )
            .filter(prompt::Column::Id.eq(prompt_id))
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound(format!(
                "prompt {prompt_id}"
            ))
            .into());
        }

        txn.commit().await?;

        Ok(true)
    }

    pub async fn find_by_prompt_id(
        &self,
        prompt_id: &str,
    ) -> anyhow::Result<Vec<PromptViewEntity>> {
        let views = PromptView::find()
            .filter(prompt_view::Column::PromptId.eq(prompt_id))
            .order_by_asc(prompt_view::Column::ViewedAt)
            .all(&self.db)
            .await?;

        Ok(views.into_iter().map(PromptViewEntity::from).collect())
    }
}
