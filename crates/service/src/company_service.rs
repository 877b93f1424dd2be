use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};
use serde::{Deserialize, Serialize};

use models::{company, invoice};

use crate::errors::ServiceError;

/// Row shape for the listing view: code and name only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Detail view: the company row plus the ids of its invoices,
/// in insertion order. Never carries full invoice records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

/// List all companies ordered by name ascending.
pub async fn list_companies(db: &DatabaseConnection) -> Result<Vec<CompanySummary>, ServiceError> {
    let rows: Vec<(String, String)> = company::Entity::find()
        .select_only()
        .column(company::Column::Code)
        .column(company::Column::Name)
        .order_by_asc(company::Column::Name)
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(|(code, name)| CompanySummary { code, name }).collect())
}

/// Get one company by code, with the ids of its invoices.
///
/// Both reads run concurrently; when the company row is absent the invoice
/// result is discarded and the lookup fails with NotFound.
pub async fn get_company(db: &DatabaseConnection, code: &str) -> Result<CompanyDetail, ServiceError> {
    let company_fut = company::Entity::find_by_id(code.to_owned()).one(db);
    let invoices_fut = invoice::Entity::find()
        .filter(invoice::Column::CompCode.eq(code))
        .order_by_asc(invoice::Column::Id)
        .select_only()
        .column(invoice::Column::Id)
        .into_tuple::<i32>()
        .all(db);

    let (found, invoice_ids) = tokio::try_join!(company_fut, invoices_fut)
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let row = found.ok_or_else(|| ServiceError::invalid_company(code))?;
    Ok(CompanyDetail {
        code: row.code,
        name: row.name,
        description: row.description,
        invoices: invoice_ids,
    })
}

/// Create a company, deriving its code from the name.
///
/// No duplicate pre-check: a second create with the same name trips the
/// primary-key constraint, which is classified as Conflict.
pub async fn create_company(
    db: &DatabaseConnection,
    name: &str,
    description: Option<String>,
) -> Result<company::Model, ServiceError> {
    company::validate_name(name)?;
    let code = company::make_code(name);
    if code.is_empty() {
        return Err(ServiceError::Validation("name yields an empty code".into()));
    }

    let am = company::ActiveModel {
        code: Set(code.clone()),
        name: Set(name.to_string()),
        description: Set(description),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Conflict(format!("company already exists: {}", code))
        }
        _ => ServiceError::Db(e.to_string()),
    })
}

/// Update a company's name and description. The code never changes.
pub async fn update_company(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    description: Option<String>,
) -> Result<company::Model, ServiceError> {
    company::validate_name(name)?;
    let mut am: company::ActiveModel = company::Entity::find_by_id(code.to_owned())
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::invalid_company(code))?
        .into();
    am.name = Set(name.to_string());
    am.description = Set(description);
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a company by code. NotFound when no row was deleted.
pub async fn delete_company(db: &DatabaseConnection, code: &str) -> Result<(), ServiceError> {
    let res = company::Entity::delete_by_id(code.to_owned())
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::invalid_company(code));
    }
    Ok(())
}
