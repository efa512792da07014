//! DTOs for candidates_sea adapter.

use time::Date;

/// DTO for creating a candidate.
#[derive(Debug, Clone, Default)]
pub struct CandidateCreate {
    pub name: String,
    pub surname: Option<String>,
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

impl CandidateCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }
}

/// Partial update. `None` leaves a column alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub surname: Option<Option<String>>,
    pub date_of_birth: Option<Option<Date>>,
    pub city: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub linkedin_link: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub work_experience: Option<Option<String>>,
    pub education: Option<Option<String>>,
    pub seeking_job: Option<Option<bool>>,
    pub desired_salary: Option<Option<i32>>,
    pub desired_industry: Option<Option<String>>,
}
