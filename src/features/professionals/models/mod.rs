mod professional;
mod specialty;

pub use professional::{Professional, ProfessionalWithUser};
pub use specialty::{ProfessionalSpecialty, SpecialtyWithCategory};
