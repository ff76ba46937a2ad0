mod license_service;
mod professional_license_service;

pub use license_service::LicenseService;
pub use professional_license_service::ProfessionalLicenseService;
