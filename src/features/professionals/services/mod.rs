mod professional_service;

pub use professional_service::ProfessionalService;
