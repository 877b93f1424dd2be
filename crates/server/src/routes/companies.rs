use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use service::company_service::{self, CompanyDetail, CompanySummary};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CompanyInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: models::company::Model,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "Companies ordered by name"),
        (status = 500, description = "Infrastructure failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<CompanyListResponse>, ApiError> {
    let companies = company_service::list_companies(&state.db).await?;
    info!(count = companies.len(), "list companies");
    Ok(Json(CompanyListResponse { companies }))
}

#[utoipa::path(
    get, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Company with its invoice ids", body = crate::openapi::CompanyDetailDoc),
        (status = 404, description = "Unknown company code")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let company = company_service::get_company(&state.db, &code).await?;
    Ok(Json(CompanyDetailResponse { company }))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate company code")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CompanyInput>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let company = company_service::create_company(&state.db, &input.name, input.description).await?;
    info!(code = %company.code, "company created");
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

#[utoipa::path(
    put, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Unknown company code")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(input): Json<CompanyInput>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company =
        company_service::update_company(&state.db, &code, &input.name, input.description).await?;
    info!(code = %company.code, "company updated");
    Ok(Json(CompanyResponse { company }))
}

#[utoipa::path(
    delete, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown company code")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    company_service::delete_company(&state.db, &code).await?;
    info!(code = %code, "company deleted");
    Ok(Json(DeleteResponse { status: "deleted" }))
}
