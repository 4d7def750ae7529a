use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One dated showing of an event. Start and end are wall-clock times
/// without a zone.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Presentation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub event_id: i64,
    pub date_start: DateTime,
    pub date_end: Option<DateTime>,
    pub flyer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
    #[sea_orm(has_many = "super::presentation_artist::Entity")]
    PresentationArtist,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::presentation_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PresentationArtist.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::presentation_artist::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::presentation_artist::Relation::Presentation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
