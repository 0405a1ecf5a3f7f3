use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub code_description: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub subject_area: String,
    pub level: String,
    pub cte_indicator: String, // "Yes" or "No"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::certification_mappings::Entity")]
    CertificationMappings,
}

impl Related<super::certification_mappings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CertificationMappings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
