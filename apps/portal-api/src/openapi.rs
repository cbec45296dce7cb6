//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Portal API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portal API",
        version = "0.1.0",
        description = "Multi-country marketing site backend with CMS",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/geo", api = crate::geo::ApiDoc),
        (path = "/api/page-content", api = domain_content::PublicApiDoc),
        (path = "/api/blog", api = domain_blog::PublicApiDoc),
        (path = "/api", api = domain_outreach::PublicApiDoc),
        (path = "/api/achievements", api = domain_achievements::PublicApiDoc),
        (path = "/api/admin", api = domain_admin::ApiDoc),
        (path = "/api/admin/page-content", api = domain_content::AdminApiDoc),
        (path = "/api/admin/blog", api = domain_blog::AdminApiDoc),
        (path = "/api/admin/achievements", api = domain_achievements::AdminApiDoc),
        (path = "/api/admin", api = domain_outreach::AdminApiDoc)
    ),
    tags(
        (name = "Geo", description = "Country detection"),
        (name = "Page Content", description = "Per-country page overrides"),
        (name = "Blog", description = "Blog posts"),
        (name = "Outreach", description = "Contact form and newsletter"),
        (name = "Achievements", description = "Public counters")
    )
)]
pub struct ApiDoc;
