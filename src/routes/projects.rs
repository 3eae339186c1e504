use crate::catalog::{CatalogRepository, Project};
use actix_web::{get, web, HttpResponse};

#[derive(serde::Deserialize)]
pub struct ProjectsQuery {
    featured: Option<String>,
}

#[derive(serde::Serialize)]
struct ProjectList<'a> {
    projects: Vec<&'a Project>,
    total: usize,
}

#[get("/api/projects")]
#[tracing::instrument(name = "List projects", skip(query, catalog))]
pub async fn list_projects(
    query: web::Query<ProjectsQuery>,
    catalog: web::Data<dyn CatalogRepository>,
) -> HttpResponse {
    let featured_only = query.featured.as_deref() == Some("true");
    let projects: Vec<&Project> = catalog
        .projects()
        .iter()
        .filter(|p| !featured_only || p.featured)
        .collect();
    HttpResponse::Ok().json(ProjectList {
        total: projects.len(),
        projects,
    })
}

/// Reads the leading decimal digits, so `2abc` addresses project 2.
fn parse_project_id(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().ok()
}

#[get("/api/projects/{id}")]
#[tracing::instrument(name = "Get a project", skip(catalog))]
pub async fn get_project(
    id: web::Path<String>,
    catalog: web::Data<dyn CatalogRepository>,
) -> HttpResponse {
    match parse_project_id(&id).and_then(|id| catalog.project(id)) {
        Some(project) => HttpResponse::Ok().json(project),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Project not found"
        })),
    }
}
