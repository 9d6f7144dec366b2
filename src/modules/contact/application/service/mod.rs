mod get_contacts_service;

pub use get_contacts_service::GetContactsService;
