pub mod candidates;
pub mod vacancies;
