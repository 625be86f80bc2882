use serde_json::{json, Value};

use motionstudy::models::SaveOutcome;
use motionstudy::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test project with a minimal study payload
    pub async fn create_project(&self, name: &str) -> SaveOutcome {
        self.create_project_with_data(
            name,
            json!({
                "projectName": name,
                "columnNames": ["Step 1", "Step 2"],
                "rows": [],
                "timerData": {}
            }),
        )
        .await
    }

    /// Create a test project with a specific payload
    pub async fn create_project_with_data(&self, name: &str, data: Value) -> SaveOutcome {
        self.state.store.upsert_by_name(name, &data).await.unwrap()
    }
}
