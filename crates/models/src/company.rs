use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::invoice;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// URL-safe slug of the name, fixed at creation time.
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Invoices }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoices => Entity::has_many(invoice::Entity).into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

/// Derive the company code from its display name.
/// Deterministic and idempotent: slugifying a slug yields itself.
pub fn make_code(name: &str) -> String {
    slug::slugify(name)
}
