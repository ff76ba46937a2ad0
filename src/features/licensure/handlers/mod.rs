mod license_handler;
mod professional_license_handler;

pub use license_handler::*;
pub use professional_license_handler::*;
