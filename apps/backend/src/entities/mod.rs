pub mod applications;
pub mod candidates;
pub mod companies;
pub mod vacancies;

pub use applications::Entity as Applications;
pub use applications::Model as Application;
pub use candidates::Entity as Candidates;
pub use candidates::Model as Candidate;
pub use companies::Entity as Companies;
pub use companies::Model as Company;
pub use vacancies::Entity as Vacancies;
pub use vacancies::Model as Vacancy;
