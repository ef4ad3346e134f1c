//! HTTP adapters backed by `reqwest`.

mod repository;

pub use repository::HttpTaskRepository;
