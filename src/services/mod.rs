pub mod candidate_service;
pub mod collection_service;
pub mod dashboard_service;
pub mod email_service;
pub mod identity_service;
pub mod interview_service;
pub mod memory_collection;
pub mod offer_service;
pub mod template_service;
pub mod workflow_service;
