pub mod claims;
pub mod page;
pub mod validated_json;

pub use page::PageQuery;
pub use validated_json::ValidatedJson;
