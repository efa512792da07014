pub mod listing;
pub mod submit;
