//! Business logic layer

pub mod book;

pub use book::BookService;
