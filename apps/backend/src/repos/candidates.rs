//! Candidate repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use crate::adapters::candidates_sea as candidates_adapter;
pub use crate::adapters::candidates_sea::{CandidateCreate, CandidatePatch};
use crate::entities::candidates;
use crate::errors::domain::DomainError;
use crate::utils::dates::serialize_opt_date;

/// Candidate domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub surname: Option<String>,
    #[serde(serialize_with = "serialize_opt_date")]
    pub date_of_birth: Option<Date>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub address: Option<String>,
    pub work_experience: Option<String>,
    pub education: Option<String>,
    pub seeking_job: Option<bool>,
    pub desired_salary: Option<i32>,
    pub desired_industry: Option<String>,
}

impl Candidate {
    /// "name surname", or just the name when no surname is on file.
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {}", self.name, surname),
            None => self.name.clone(),
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Candidate>, DomainError> {
    let rows = candidates_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Candidate::from).collect())
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Candidate>, DomainError> {
    let row = candidates_adapter::find_by_id(conn, id).await?;
    Ok(row.map(Candidate::from))
}

pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Candidate, DomainError> {
    find(conn, id)
        .await?
        .ok_or_else(|| DomainError::candidate_not_found(id))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CandidateCreate,
) -> Result<Candidate, DomainError> {
    let row = candidates_adapter::create(conn, dto).await?;
    Ok(Candidate::from(row))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: CandidatePatch,
) -> Result<Candidate, DomainError> {
    candidates_adapter::update(conn, id, patch)
        .await?
        .map(Candidate::from)
        .ok_or_else(|| DomainError::candidate_not_found(id))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    if candidates_adapter::delete(conn, id).await? {
        Ok(())
    } else {
        Err(DomainError::candidate_not_found(id))
    }
}

impl From<candidates::Model> for Candidate {
    fn from(model: candidates::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            surname: model.surname,
            date_of_birth: model.date_of_birth,
            city: model.city,
            region: model.region,
            email: model.email,
            phone: model.phone,
            facebook_link: model.facebook_link,
            linkedin_link: model.linkedin_link,
            address: model.address,
            work_experience: model.work_experience,
            education: model.education,
            seeking_job: model.seeking_job,
            desired_salary: model.desired_salary,
            desired_industry: model.desired_industry,
        }
    }
}
