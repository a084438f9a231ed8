use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prompts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub prompt_text: String,
    pub thumbnail_url: Option<String>,
    pub media_url: Option<String>,
    pub media_type: String,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub view_count: i64,
    pub is_featured: bool,
    pub additional_info: Option<Json>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::prompt_tag::Entity")]
    PromptTag,
    #[sea_orm(has_many = "super::prompt_view::Entity")]
    PromptView,
}

impl Related<super::prompt_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PromptTag.def()
    }
}

impl Related<super::prompt_view::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PromptView.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::prompt_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::prompt_tag::Relation::Prompt.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
