//! SeaORM adapters. Free functions over `ConnectionTrait` returning `DbErr`;
//! repos map errors into `DomainError`.

use sea_orm::{ActiveValue, Set, Value};

pub mod applications_sea;
pub mod candidates_sea;
pub mod companies_sea;
pub mod vacancies_sea;

/// Overwrite `slot` only when the patch carries a value for it.
pub(crate) fn set_if_present<T>(slot: &mut ActiveValue<T>, value: Option<T>)
where
    T: Into<Value>,
{
    if let Some(value) = value {
        *slot = Set(value);
    }
}
