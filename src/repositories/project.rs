use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, Schema, Set,
};
use serde_json::Value;
use time::OffsetDateTime;

use crate::entity::project::{ActiveModel, Column, Entity as ProjectEntity, Model};
use crate::error::{AppError, AppResult};
use crate::models::{Project, ProjectSummary, SaveOutcome};

/// Persistence store for study projects.
///
/// Owns the database handle and exposes the four operations the router
/// needs. Constructed once at startup with an already-established
/// connection; see `AppState::new`.
#[derive(Clone)]
pub struct ProjectStore {
    db: DatabaseConnection,
}

impl ProjectStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the projects table if it does not exist yet.
    ///
    /// Idempotent; runs before the server starts accepting requests. The
    /// statement is generated from the entity, so it matches whichever
    /// backend the connection ended up on.
    pub async fn init_schema(&self) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut table = schema.create_table_from_entity(ProjectEntity);
        table.if_not_exists();

        self.db.execute(backend.build(&table)).await?;
        Ok(())
    }

    /// Create or update the project carrying `name`.
    ///
    /// The first record whose name matches gets its payload replaced and
    /// `updated_at` refreshed; otherwise a new record is inserted. Lookup
    /// and write are separate statements: concurrent saves of the same name
    /// race, and `name` carries no uniqueness constraint.
    pub async fn upsert_by_name(&self, name: &str, payload: &Value) -> AppResult<SaveOutcome> {
        let serialized = serde_json::to_string(payload)?;

        let existing = ProjectEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await?;

        match existing {
            Some(model) => {
                let id = model.id;
                let mut active: ActiveModel = model.into();
                active.data = Set(serialized);
                active.updated_at = Set(OffsetDateTime::now_utc());
                active.update(&self.db).await?;

                Ok(SaveOutcome { id, created: false })
            }
            None => {
                let now = OffsetDateTime::now_utc();
                let inserted = ActiveModel {
                    id: NotSet,
                    name: Set(name.to_owned()),
                    data: Set(serialized),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&self.db)
                .await?;

                Ok(SaveOutcome {
                    id: inserted.id,
                    created: true,
                })
            }
        }
    }

    /// List id/name/updated_at summaries for every stored project.
    ///
    /// Order is unspecified.
    pub async fn list_all(&self) -> AppResult<Vec<ProjectSummary>> {
        let models = ProjectEntity::find().all(&self.db).await?;

        Ok(models
            .into_iter()
            .map(|m| ProjectSummary {
                id: m.id,
                name: m.name,
                updated_at: m.updated_at,
            })
            .collect())
    }

    /// Fetch the full record, deserializing the stored payload.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        model_into_project(model)
    }

    /// Delete the record permanently.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = ProjectEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Project".to_string()));
        }

        Ok(())
    }
}

// Conversion from the SeaORM model to our domain model; fallible because the
// stored payload has to deserialize back into JSON.
fn model_into_project(m: Model) -> AppResult<Project> {
    let data = serde_json::from_str(&m.data)?;

    Ok(Project {
        id: m.id,
        name: m.name,
        data,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}
