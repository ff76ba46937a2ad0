mod book_handler;

pub use book_handler::*;
