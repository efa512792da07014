//! Domain-facing persistence functions (generic over ConnectionTrait).

pub mod applications;
pub mod candidates;
pub mod companies;
pub mod vacancies;
