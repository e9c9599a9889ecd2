mod in_memory_contact_book;
mod traits;

pub use in_memory_contact_book::InMemoryContactBook;
pub use traits::ContactCollection;
