mod get_contact;
mod update_contact;

pub use get_contact::get_contact_handler;
pub use update_contact::{update_contact_handler, UpdateContactRequest};

pub use get_contact::__path_get_contact_handler;
pub use update_contact::__path_update_contact_handler;
