use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A message optionally attached to a user and/or a presentation.
/// Both links are nullable so a comment may outlive neither, either or both.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub presentation_id: Option<i64>,
    pub user_id: Option<i64>,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::presentation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presentation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
