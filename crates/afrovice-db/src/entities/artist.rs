use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub name: String,
    pub photo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_gender::Entity")]
    ArtistGender,
    #[sea_orm(has_many = "super::presentation_artist::Entity")]
    PresentationArtist,
}

impl Related<super::artist_gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistGender.def()
    }
}

impl Related<super::presentation_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PresentationArtist.def()
    }
}

impl Related<super::music_gender::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_gender::Relation::MusicGender.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_gender::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
