pub mod document_store;
pub mod mongo_repo;
