mod professional_dto;
mod specialty_dto;

pub use professional_dto::*;
pub use specialty_dto::*;
