//! SeaORM adapter for companies.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set,
};

use super::set_if_present;
use crate::entities::companies;

pub mod dto;

pub use dto::{CompanyCreate, CompanyPatch};

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<companies::Model>, sea_orm::DbErr> {
    companies::Entity::find()
        .order_by_asc(companies::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<companies::Model>, sea_orm::DbErr> {
    companies::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompanyCreate,
) -> Result<companies::Model, sea_orm::DbErr> {
    let active = companies::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        industry: Set(dto.industry),
        employee: Set(dto.employee),
        city: Set(dto.city),
        region: Set(dto.region),
        address: Set(dto.address),
        email: Set(dto.email),
        phone: Set(dto.phone),
        logo_link: Set(dto.logo_link),
        facebook_link: Set(dto.facebook_link),
        website_link: Set(dto.website_link),
        description: Set(dto.description),
        seeking_employee: Set(dto.seeking_employee),
    };
    active.insert(conn).await
}

/// Returns `None` when no company has this id.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: CompanyPatch,
) -> Result<Option<companies::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: companies::ActiveModel = existing.clone().into();
    set_if_present(&mut active.name, patch.name);
    set_if_present(&mut active.industry, patch.industry);
    set_if_present(&mut active.employee, patch.employee);
    set_if_present(&mut active.city, patch.city);
    set_if_present(&mut active.region, patch.region);
    set_if_present(&mut active.address, patch.address);
    set_if_present(&mut active.email, patch.email);
    set_if_present(&mut active.phone, patch.phone);
    set_if_present(&mut active.logo_link, patch.logo_link);
    set_if_present(&mut active.facebook_link, patch.facebook_link);
    set_if_present(&mut active.website_link, patch.website_link);
    set_if_present(&mut active.description, patch.description);
    set_if_present(&mut active.seeking_employee, patch.seeking_employee);

    if !active.is_changed() {
        return Ok(Some(existing));
    }
    active.update(conn).await.map(Some)
}

/// Returns `false` when no company has this id.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<bool, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(company) => {
            company.delete(conn).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
