mod get_contacts;

pub use get_contacts::GetContactsUseCase;
