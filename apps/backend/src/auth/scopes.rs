//! Scopes attached to protected routes.

pub const POST_COMPANIES: &str = "post:companies";
pub const PATCH_COMPANIES: &str = "patch:companies";
pub const DELETE_COMPANIES: &str = "delete:companies";

pub const POST_CANDIDATES: &str = "post:candidates";
pub const PATCH_CANDIDATES: &str = "patch:candidates";
pub const DELETE_CANDIDATES: &str = "delete:candidates";

pub const POST_VACANCIES: &str = "post:vacancies";
pub const PATCH_VACANCIES: &str = "patch:vacancies";
pub const DELETE_VACANCIES: &str = "delete:vacancies";

/// Read a candidate's applications.
pub const GET_APPLICATIONS: &str = "get:applications";
/// Read the applicants to a vacancy.
pub const GET_CANDIDATES: &str = "get:candidates";
pub const POST_APPLICATION: &str = "post:application";
pub const DELETE_APPLICATION: &str = "delete:application";
