use migration::Migrator;
use migration::MigratorTrait;
use prompt::PromptRepository;
use prompt_view::PromptViewRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tag::TagRepository;

pub mod active_models;
pub mod catalog;
pub mod prompt;
pub mod prompt_view;
pub mod tag;

pub use catalog::Catalog;

#[derive(Clone, Debug)]
pub struct Repository {
    pub prompt: PromptRepository,
    pub tag: TagRepository,
    pub prompt_view: PromptViewRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("could not connect to the prompt store: {0}")]
    Connect(#[source] sea_orm::DbErr),
    #[error("could not bring the prompt store schema up to date: {0}")]
    Migrate(#[source] sea_orm::DbErr),
}

impl Repository {
    /// Connects to `db_url` and brings the schema up to date.
    pub async fn new(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, RepositoryError> {
        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt)
            .await
            .map_err(RepositoryError::Connect)?;

        Migrator::up(&db, None)
            .await
            .map_err(RepositoryError::Migrate)?;

        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            prompt: PromptRepository::new(db.clone()),
            tag: TagRepository::new(db.clone()),
            prompt_view: PromptViewRepository::new(db),
        }
    }
}
