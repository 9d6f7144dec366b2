mod get_contacts;

pub use get_contacts::{__path_get_contacts_handler, get_contacts_handler};
