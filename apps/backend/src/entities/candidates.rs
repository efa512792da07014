use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: Option<String>,
    #[sea_orm(column_name = "date_of_birth")]
    pub date_of_birth: Option<Date>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_name = "facebook_link")]
    pub facebook_link: Option<String>,
    #[sea_orm(column_name = "linkedin_link")]
    pub linkedin_link: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_name = "work_experience", column_type = "Text", nullable)]
    pub work_experience: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub education: Option<String>,
    #[sea_orm(column_name = "seeking_job")]
    pub seeking_job: Option<bool>,
    #[sea_orm(column_name = "desired_salary")]
    pub desired_salary: Option<i32>,
    #[sea_orm(column_name = "desired_industry")]
    pub desired_industry: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
