use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CompanyInputDoc {
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyDetailDoc {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyInputDoc,
            CompanyDoc,
            CompanyDetailDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
    )
)]
pub struct ApiDoc;
