use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub employee: Option<i32>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_name = "logo_link")]
    pub logo_link: Option<String>,
    #[sea_orm(column_name = "facebook_link")]
    pub facebook_link: Option<String>,
    #[sea_orm(column_name = "website_link")]
    pub website_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "seeking_employee")]
    pub seeking_employee: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vacancies::Entity")]
    Vacancies,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::vacancies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vacancies.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
