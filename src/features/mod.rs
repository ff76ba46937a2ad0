pub mod books;
pub mod categories;
pub mod clients;
pub mod licensure;
pub mod professionals;
pub mod reviews;
pub mod users;
