mod professional_handler;

pub use professional_handler::*;
