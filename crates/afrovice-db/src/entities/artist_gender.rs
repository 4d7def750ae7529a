use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join row linking an artist to one of its genres.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Artist_Gender")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub artist_id: i64,
    pub music_gender_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::music_gender::Entity",
        from = "Column::MusicGenderId",
        to = "super::music_gender::Column::Id"
    )]
    MusicGender,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::music_gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MusicGender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
