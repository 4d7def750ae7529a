use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::presentation::Entity")]
    Presentation,
}

impl Related<super::presentation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presentation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
