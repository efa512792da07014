//! DTOs for companies_sea adapter.

/// DTO for creating a company.
#[derive(Debug, Clone, Default)]
pub struct CompanyCreate {
    pub name: String,
    pub industry: Option<String>,
    pub employee: Option<i32>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub description: Option<String>,
    pub seeking_employee: Option<bool>,
}

impl CompanyCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial update. `None` leaves a column alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub industry: Option<Option<String>>,
    pub employee: Option<Option<i32>>,
    pub city: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub logo_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website_link: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub seeking_employee: Option<Option<bool>>,
}
