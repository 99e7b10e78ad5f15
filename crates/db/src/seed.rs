//! Built-in demo catalog for fresh databases.
//!
//! Seeding only happens when the `roles` table is empty, so running it on
//! every startup is safe.

use careerpath_core::catalog::{Difficulty, ResourceType};
use sqlx::PgPool;

use crate::models::resource::CreateResource;
use crate::models::role::CreateRole;
use crate::repositories::RoleRepo;

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub roles_created: usize,
    pub resources_created: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.roles_created == 0
    }
}

/// Insert the demo catalog if no roles exist yet.
pub async fn seed_demo_catalog(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let existing = RoleRepo::count(pool).await?;
    if existing > 0 {
        tracing::info!(existing, "Roles already present, skipping demo seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    for role in demo_roles() {
        let detail = RoleRepo::create(pool, &role).await?;
        report.roles_created += 1;
        report.resources_created += detail.resources.len();
    }

    tracing::info!(
        roles = report.roles_created,
        resources = report.resources_created,
        "Demo catalog seeded"
    );
    Ok(report)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resource(title: &str, url: &str, kind: ResourceType, level: Difficulty) -> CreateResource {
    CreateResource {
        title: title.to_string(),
        url: url.to_string(),
        resource_type: kind.as_str().to_string(),
        difficulty: level.as_str().to_string(),
    }
}

/// The demo roles, each with a handful of resources.
pub fn demo_roles() -> Vec<CreateRole> {
    vec![
        CreateRole {
            name: "Backend Developer".into(),
            short_description: "Builds the services, APIs and data stores behind applications."
                .into(),
            long_description: "Backend developers design and implement server-side logic: \
                HTTP APIs, background jobs, and the database schemas that hold an \
                application's state. They care about correctness, performance and how \
                systems behave under failure."
                .into(),
            responsibilities: lines(&[
                "Design and document REST APIs",
                "Model relational data and write migrations",
                "Write automated tests for business logic",
                "Monitor and troubleshoot production services",
            ]),
            skills: lines(&["HTTP", "SQL", "Testing", "Git", "Linux"]),
            resources: vec![
                resource(
                    "MDN: An overview of HTTP",
                    "https://developer.mozilla.org/en-US/docs/Web/HTTP/Overview",
                    ResourceType::Article,
                    Difficulty::Beginner,
                ),
                resource(
                    "PostgreSQL Tutorial",
                    "https://www.postgresql.org/docs/current/tutorial.html",
                    ResourceType::Course,
                    Difficulty::Intermediate,
                ),
            ],
        },
        CreateRole {
            name: "Frontend Developer".into(),
            short_description: "Builds the user interfaces people interact with in the browser."
                .into(),
            long_description: "Frontend developers turn designs into accessible, responsive \
                interfaces. They manage client-side state, talk to backend APIs and keep \
                pages fast on slow networks and devices."
                .into(),
            responsibilities: lines(&[
                "Implement UI components from designs",
                "Integrate with backend APIs",
                "Ensure accessibility and responsiveness",
            ]),
            skills: lines(&["HTML", "CSS", "JavaScript", "Accessibility"]),
            resources: vec![
                resource(
                    "MDN: Learn web development",
                    "https://developer.mozilla.org/en-US/docs/Learn",
                    ResourceType::Course,
                    Difficulty::Beginner,
                ),
                resource(
                    "web.dev: Learn CSS",
                    "https://web.dev/learn/css",
                    ResourceType::Course,
                    Difficulty::Intermediate,
                ),
            ],
        },
        CreateRole {
            name: "Data Analyst".into(),
            short_description: "Turns raw data into answers and reports that guide decisions."
                .into(),
            long_description: "Data analysts collect, clean and explore data, then communicate \
                what they find through queries, dashboards and written summaries. They work \
                closely with stakeholders to frame the right questions."
                .into(),
            responsibilities: lines(&[
                "Write queries to answer business questions",
                "Clean and validate datasets",
                "Build dashboards and reports",
            ]),
            skills: lines(&["SQL", "Spreadsheets", "Statistics", "Data visualization"]),
            resources: vec![resource(
                "SQL Tutorial for Data Analysis",
                "https://mode.com/sql-tutorial",
                ResourceType::Article,
                Difficulty::Beginner,
            )],
        },
        CreateRole {
            name: "DevOps Engineer".into(),
            short_description: "Automates how software is built, shipped and operated.".into(),
            long_description: "DevOps engineers own the delivery pipeline and the platforms \
                services run on: continuous integration, infrastructure as code, \
                observability and incident response."
                .into(),
            responsibilities: lines(&[
                "Maintain CI/CD pipelines",
                "Manage infrastructure as code",
                "Set up monitoring and alerting",
            ]),
            skills: lines(&["Linux", "Containers", "CI/CD", "Networking"]),
            resources: vec![resource(
                "Docker: Getting started",
                "https://docs.docker.com/get-started/",
                ResourceType::Video,
                Difficulty::Advanced,
            )],
        },
    ]
}
