pub mod common;
pub mod project;

pub use common::resource_not_found;
pub use project::{
    delete_project, get_project, list_projects, save_project, MessageResponse,
    ProjectListResponse, ProjectResponse, ProjectSummaryResponse, SaveProjectResponse,
    DEFAULT_PROJECT_NAME,
};
