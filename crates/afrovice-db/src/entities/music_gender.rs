use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A music genre. The table keeps its historical `Music_Gender` name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Music_Gender")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_gender::Entity")]
    ArtistGender,
}

impl Related<super::artist_gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistGender.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_gender::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_gender::Relation::MusicGender.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
