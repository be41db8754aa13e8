use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::AppError,
    models::{
        BasicInfo, FunctionalRequirements, MaterialChoices, Project, ProjectWithRequirements,
        Requirement, SpecialRequirements, StylePreferences,
    },
    state::AppState,
};

/// Routes mounted under `/api/requirements`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_requirement))
        .route(
            "/:id",
            get(get_project).put(update_requirement).delete(delete_project),
        )
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementRequest {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub style_preferences: StylePreferences,
    #[serde(default)]
    pub material_choices: MaterialChoices,
    #[serde(default)]
    pub functional_requirements: FunctionalRequirements,
    #[serde(default)]
    pub special_requirements: SpecialRequirements,
}

/// Sections present in the body replace the stored ones.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementRequest {
    pub basic_info: Option<BasicInfo>,
    pub style_preferences: Option<StylePreferences>,
    pub material_choices: Option<MaterialChoices>,
    pub functional_requirements: Option<FunctionalRequirements>,
    pub special_requirements: Option<SpecialRequirements>,
}

#[derive(Debug, Serialize)]
pub struct CreatedProject {
    pub project: Project,
    pub requirement: Requirement,
}

/// POST /api/requirements
async fn create_requirement(
    State(state): State<AppState>,
    Json(req): Json<CreateRequirementRequest>,
) -> Result<(StatusCode, Json<CreatedProject>), AppError> {
    let project = Project::new(req.project_name, req.project_description);

    let mut requirement = Requirement::new(project.id.clone());
    requirement.basic_info = req.basic_info;
    requirement.style_preferences = req.style_preferences;
    requirement.material_choices = req.material_choices;
    requirement.functional_requirements = req.functional_requirements;
    requirement.special_requirements = req.special_requirements;

    state.projects.insert(project.clone());
    state.requirements.insert(requirement.clone());

    info!(
        project_id = %project.id,
        requirement_id = %requirement.id,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(CreatedProject { project, requirement })))
}

fn with_requirements(state: &AppState, project: Project) -> ProjectWithRequirements {
    let requirements = state
        .requirements
        .find(&|r: &Requirement| r.project_id == project.id);
    ProjectWithRequirements { project, requirements }
}

/// GET /api/requirements
async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectWithRequirements>> {
    let projects = state
        .projects
        .list()
        .into_iter()
        .map(|project| with_requirements(&state, project))
        .collect();

    Json(projects)
}

/// GET /api/requirements/:id (project id)
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectWithRequirements>, AppError> {
    let project = state
        .projects
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))?;

    Ok(Json(with_requirements(&state, project)))
}

/// PUT /api/requirements/:id (requirement id)
async fn update_requirement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRequirementRequest>,
) -> Result<Json<Requirement>, AppError> {
    let mut requirement = state
        .requirements
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Requirement {}", id)))?;

    if let Some(basic_info) = req.basic_info {
        requirement.basic_info = basic_info;
    }
    if let Some(style_preferences) = req.style_preferences {
        requirement.style_preferences = style_preferences;
    }
    if let Some(material_choices) = req.material_choices {
        requirement.material_choices = material_choices;
    }
    if let Some(functional_requirements) = req.functional_requirements {
        requirement.functional_requirements = functional_requirements;
    }
    if let Some(special_requirements) = req.special_requirements {
        requirement.special_requirements = special_requirements;
    }

    if !state.requirements.update(requirement.clone()) {
        return Err(AppError::NotFound(format!("Requirement {}", id)));
    }

    info!(requirement_id = %id, "Requirement updated");
    Ok(Json(requirement))
}

/// DELETE /api/requirements/:id (project id)
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .projects
        .delete(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))?;

    let requirements = state.requirements.find(&|r: &Requirement| r.project_id == id);
    for requirement in &requirements {
        state.requirements.delete(&requirement.id);
    }

    info!(project_id = %id, requirements = requirements.len(), "Project deleted");
    Ok(Json(json!({ "message": "Project and requirements deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_partial_body() {
        let req: CreateRequirementRequest = serde_json::from_str(
            r#"{"projectName": "Flat", "basicInfo": {"area": 85, "roomType": "whole-house"}}"#,
        )
        .unwrap();
        assert_eq!(req.project_name.as_deref(), Some("Flat"));
        assert_eq!(req.basic_info.area, Some(85.0));
        assert!(req.style_preferences.style.is_none());
    }

    #[test]
    fn test_update_request_only_sets_present_sections() {
        let req: UpdateRequirementRequest =
            serde_json::from_str(r#"{"materialChoices": {"floorMaterial": "marble"}}"#).unwrap();
        assert!(req.basic_info.is_none());
        assert!(req.material_choices.is_some());
    }
}
