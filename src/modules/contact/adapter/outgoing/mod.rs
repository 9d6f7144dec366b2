pub mod contact_query_in_memory;

pub use contact_query_in_memory::InMemoryContactQuery;
