use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub github: String,
    pub demo: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// Skill categories, serialized as an object keyed by category name.
#[derive(Debug, Clone)]
pub struct SkillCatalog(pub Vec<SkillCategory>);

impl Serialize for SkillCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

/// Read-only source of the portfolio's projects and skills.
pub trait CatalogRepository: Send + Sync {
    fn projects(&self) -> &[Project];
    fn skills(&self) -> &SkillCatalog;

    fn project(&self, id: u32) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }

    fn skill_category(&self, name: &str) -> Option<&SkillCategory> {
        self.skills().0.iter().find(|c| c.name == name)
    }
}

pub struct StaticCatalog {
    projects: Vec<Project>,
    skills: SkillCatalog,
}

impl StaticCatalog {
    pub fn new(projects: Vec<Project>, skills: SkillCatalog) -> Self {
        Self { projects, skills }
    }
}

impl CatalogRepository for StaticCatalog {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn skills(&self) -> &SkillCatalog {
        &self.skills
    }
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    technologies: &[&str],
    (repository, demo): (&str, &str),
    featured: bool,
) -> Project {
    Project {
        id,
        title: title.into(),
        description: description.into(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: format!("/images/project{}.jpg", id),
        github: format!("https://github.com/divya/{}", repository),
        demo: format!("https://{}-demo.com", demo),
        featured,
    }
}

fn category(name: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        name: name.into(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        let projects = vec![
            project(
                1,
                "E-Commerce Platform",
                "Full-stack e-commerce application with React.js frontend and Node.js backend",
                &["React.js", "Node.js", "MongoDB", "Express.js", "Redux"],
                ("ecommerce", "ecommerce"),
                true,
            ),
            project(
                2,
                "Task Management App",
                "Collaborative task management application with real-time updates",
                &["React.js", "Socket.io", "Node.js", "MySQL"],
                ("taskmanager", "taskmanager"),
                true,
            ),
            project(
                3,
                "Weather Dashboard",
                "Modern weather application with location-based forecasts",
                &["React.js", "Weather API", "Chart.js", "CSS3"],
                ("weather-app", "weather"),
                false,
            ),
        ];
        let skills = SkillCatalog(vec![
            category(
                "frontend",
                &[
                    ("React.js", 90),
                    ("JavaScript", 85),
                    ("TypeScript", 75),
                    ("HTML5", 95),
                    ("CSS3", 90),
                ],
            ),
            category(
                "backend",
                &[
                    ("Node.js", 85),
                    ("Express.js", 80),
                    ("MongoDB", 75),
                    ("MySQL", 80),
                    ("REST APIs", 85),
                ],
            ),
            category(
                "tools",
                &[
                    ("Git & GitHub", 85),
                    ("VS Code", 90),
                    ("npm/yarn", 80),
                    ("Postman", 85),
                ],
            ),
        ]);

        Self::new(projects, skills)
    }
}
