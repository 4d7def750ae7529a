use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join row placing an artist on a presentation's lineup at `schedule`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Presentation_Artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub presentation_id: i64,
    pub artist_id: i64,
    pub schedule: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::presentation::Entity",
        from = "Column::PresentationId",
        to = "super::presentation::Column::Id"
    )]
    Presentation,
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id"
    )]
    Artist,
}

impl Related<super::presentation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presentation.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
