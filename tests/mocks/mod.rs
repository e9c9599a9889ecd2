mod mock_contact_collection;

pub use mock_contact_collection::MockContactCollection;
