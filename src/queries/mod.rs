pub mod catalog_queries;
pub mod contact_queries;
pub mod order_queries;
