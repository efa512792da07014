//! DTOs for vacancies_sea adapter.

/// DTO for creating a vacancy. `date_posted` is stamped by the adapter.
#[derive(Debug, Clone, Default)]
pub struct VacancyCreate {
    pub company_id: i32,
    pub job_title: String,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub min_salary: Option<i32>,
}

impl VacancyCreate {
    pub fn new(company_id: i32, job_title: impl Into<String>) -> Self {
        Self {
            company_id,
            job_title: job_title.into(),
            ..Self::default()
        }
    }
}

/// Partial update. `None` leaves a column alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct VacancyPatch {
    pub company_id: Option<i32>,
    pub job_title: Option<String>,
    pub job_description: Option<Option<String>>,
    pub requirements: Option<Option<String>>,
    pub benefits: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub min_salary: Option<Option<i32>>,
}
