//! SeaORM adapter for applications and their joined list views.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, ModelTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{applications, candidates, companies, vacancies};

pub mod dto;

pub use dto::{ApplicationCreate, CandidateApplicationRow, VacancyApplicationRow};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<applications::Model>, sea_orm::DbErr> {
    applications::Entity::find_by_id(id).one(conn).await
}

pub async fn exists_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    candidate_id: i32,
    vacancy_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let count = applications::Entity::find()
        .filter(applications::Column::CandidateId.eq(candidate_id))
        .filter(applications::Column::VacancyId.eq(vacancy_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ApplicationCreate,
) -> Result<applications::Model, sea_orm::DbErr> {
    let active = applications::ActiveModel {
        id: NotSet,
        company_id: Set(dto.company_id),
        vacancy_id: Set(dto.vacancy_id),
        candidate_id: Set(dto.candidate_id),
        cover_letter: Set(dto.cover_letter),
        date_submitted: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// Returns `false` when no application has this id.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<bool, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(application) => {
            application.delete(conn).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// All applications filed by one candidate, oldest first.
pub async fn list_for_candidate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    candidate_id: i32,
) -> Result<Vec<CandidateApplicationRow>, sea_orm::DbErr> {
    applications::Entity::find()
        .select_only()
        .column_as(applications::Column::Id, "application_id")
        .column_as(applications::Column::VacancyId, "vacancy_id")
        .column_as(vacancies::Column::JobTitle, "vacancy_job_title")
        .column_as(applications::Column::CompanyId, "company_id")
        .column_as(companies::Column::Name, "company_name")
        .column_as(applications::Column::CoverLetter, "cover_letter")
        .column_as(applications::Column::DateSubmitted, "date_submitted")
        .join(JoinType::InnerJoin, applications::Relation::Vacancy.def())
        .join(JoinType::InnerJoin, applications::Relation::Company.def())
        .filter(applications::Column::CandidateId.eq(candidate_id))
        .order_by_asc(applications::Column::Id)
        .into_model::<CandidateApplicationRow>()
        .all(conn)
        .await
}

/// All applications received by one vacancy, oldest first.
pub async fn list_for_vacancy<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    vacancy_id: i32,
) -> Result<Vec<VacancyApplicationRow>, sea_orm::DbErr> {
    applications::Entity::find()
        .select_only()
        .column_as(applications::Column::VacancyId, "vacancy_id")
        .column_as(applications::Column::Id, "application_id")
        .column_as(applications::Column::CandidateId, "candidate_id")
        .column_as(candidates::Column::Name, "candidate_name")
        .column_as(candidates::Column::Surname, "candidate_surname")
        .column_as(applications::Column::CoverLetter, "cover_letter")
        .column_as(applications::Column::DateSubmitted, "date_submitted")
        .join(JoinType::InnerJoin, applications::Relation::Candidate.def())
        .filter(applications::Column::VacancyId.eq(vacancy_id))
        .order_by_asc(applications::Column::Id)
        .into_model::<VacancyApplicationRow>()
        .all(conn)
        .await
}
