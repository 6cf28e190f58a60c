pub mod bulk_loader;
pub mod index_admin;
pub mod language_model;
pub mod search_backend;
