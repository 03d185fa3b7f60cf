pub mod assessment;
pub mod minimal;

pub use assessment::{COMPANY_PROMPT, EMAIL_PROMPT, QUESTIONS_JSON, cybersecurity_assessment};
pub use minimal::gdpr_pci;
