//! SeaORM adapter for candidates.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set,
};

use super::set_if_present;
use crate::entities::candidates;

pub mod dto;

pub use dto::{CandidateCreate, CandidatePatch};

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<candidates::Model>, sea_orm::DbErr> {
    candidates::Entity::find()
        .order_by_asc(candidates::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<candidates::Model>, sea_orm::DbErr> {
    candidates::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CandidateCreate,
) -> Result<candidates::Model, sea_orm::DbErr> {
    let active = candidates::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        surname: Set(dto.surname),
        date_of_birth: Set(dto.date_of_birth),
        city: Set(dto.city),
        region: Set(dto.region),
        email: Set(dto.email),
        phone: Set(dto.phone),
        facebook_link: Set(dto.facebook_link),
        linkedin_link: Set(dto.linkedin_link),
        address: Set(dto.address),
        work_experience: Set(dto.work_experience),
        education: Set(dto.education),
        seeking_job: Set(dto.seeking_job),
        desired_salary: Set(dto.desired_salary),
        desired_industry: Set(dto.desired_industry),
    };
    active.insert(conn).await
}

/// Returns `None` when no candidate has this id.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: CandidatePatch,
) -> Result<Option<candidates::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: candidates::ActiveModel = existing.clone().into();
    set_if_present(&mut active.name, patch.name);
    set_if_present(&mut active.surname, patch.surname);
    set_if_present(&mut active.date_of_birth, patch.date_of_birth);
    set_if_present(&mut active.city, patch.city);
    set_if_present(&mut active.region, patch.region);
    set_if_present(&mut active.email, patch.email);
    set_if_present(&mut active.phone, patch.phone);
    set_if_present(&mut active.facebook_link, patch.facebook_link);
    set_if_present(&mut active.linkedin_link, patch.linkedin_link);
    set_if_present(&mut active.address, patch.address);
    set_if_present(&mut active.work_experience, patch.work_experience);
    set_if_present(&mut active.education, patch.education);
    set_if_present(&mut active.seeking_job, patch.seeking_job);
    set_if_present(&mut active.desired_salary, patch.desired_salary);
    set_if_present(&mut active.desired_industry, patch.desired_industry);

    if !active.is_changed() {
        return Ok(Some(existing));
    }
    active.update(conn).await.map(Some)
}

/// Returns `false` when no candidate has this id.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<bool, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(candidate) => {
            candidate.delete(conn).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
