pub mod project_query_in_memory;

pub use project_query_in_memory::InMemoryProjectQuery;
