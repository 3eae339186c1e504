use crate::catalog::{CatalogRepository, Skill};
use actix_web::{get, web, HttpResponse};

#[derive(serde::Serialize)]
struct CategorySkills<'a> {
    category: &'a str,
    skills: &'a [Skill],
}

#[get("/api/skills")]
pub async fn list_skills(catalog: web::Data<dyn CatalogRepository>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.skills())
}

#[get("/api/skills/{category}")]
#[tracing::instrument(name = "Get a skill category", skip(catalog))]
pub async fn get_skill_category(
    category: web::Path<String>,
    catalog: web::Data<dyn CatalogRepository>,
) -> HttpResponse {
    match catalog.skill_category(&category) {
        Some(found) => HttpResponse::Ok().json(CategorySkills {
            category: &found.name,
            skills: &found.skills,
        }),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Skill category not found"
        })),
    }
}
