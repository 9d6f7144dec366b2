pub mod directory;
pub mod entities;

pub use directory::{ContactDirectory, ContactDirectoryError};
pub use entities::{ContactKind, ContactLink};
