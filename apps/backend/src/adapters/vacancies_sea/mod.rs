//! SeaORM adapter for vacancies.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set,
};
use time::OffsetDateTime;

use super::set_if_present;
use crate::entities::{companies, vacancies};

pub mod dto;

pub use dto::{VacancyCreate, VacancyPatch};

pub async fn list_with_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(vacancies::Model, Option<companies::Model>)>, sea_orm::DbErr> {
    vacancies::Entity::find()
        .find_also_related(companies::Entity)
        .order_by_asc(vacancies::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<vacancies::Model>, sea_orm::DbErr> {
    vacancies::Entity::find_by_id(id).one(conn).await
}

pub async fn find_with_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<(vacancies::Model, Option<companies::Model>)>, sea_orm::DbErr> {
    vacancies::Entity::find_by_id(id)
        .find_also_related(companies::Entity)
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VacancyCreate,
) -> Result<vacancies::Model, sea_orm::DbErr> {
    let active = vacancies::ActiveModel {
        id: NotSet,
        company_id: Set(dto.company_id),
        job_title: Set(dto.job_title),
        job_description: Set(dto.job_description),
        requirements: Set(dto.requirements),
        benefits: Set(dto.benefits),
        city: Set(dto.city),
        region: Set(dto.region),
        min_salary: Set(dto.min_salary),
        date_posted: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// Returns `None` when no vacancy has this id. Every update re-stamps
/// `date_posted`.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: VacancyPatch,
) -> Result<Option<vacancies::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: vacancies::ActiveModel = existing.into();
    set_if_present(&mut active.company_id, patch.company_id);
    set_if_present(&mut active.job_title, patch.job_title);
    set_if_present(&mut active.job_description, patch.job_description);
    set_if_present(&mut active.requirements, patch.requirements);
    set_if_present(&mut active.benefits, patch.benefits);
    set_if_present(&mut active.city, patch.city);
    set_if_present(&mut active.region, patch.region);
    set_if_present(&mut active.min_salary, patch.min_salary);
    active.date_posted = Set(OffsetDateTime::now_utc());

    active.update(conn).await.map(Some)
}

/// Returns `false` when no vacancy has this id.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<bool, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(vacancy) => {
            vacancy.delete(conn).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
