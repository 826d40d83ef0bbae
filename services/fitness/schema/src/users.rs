use sea_orm::entity::prelude::*;

/// Registered account. `password_hash` is an Argon2id PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plans::Entity")]
    Plans,
    #[sea_orm(has_many = "super::onboarding_answers::Entity")]
    OnboardingAnswers,
}

impl Related<super::plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plans.def()
    }
}

impl Related<super::onboarding_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnboardingAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
