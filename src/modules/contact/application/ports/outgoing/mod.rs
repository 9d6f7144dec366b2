pub mod contact_query;

pub use contact_query::ContactQuery;
