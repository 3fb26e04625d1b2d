pub mod assessment;
pub mod candidate;
pub mod entity;
pub mod evaluation;
pub mod interview_schedule;
pub mod offer_template;
pub mod user;

pub use assessment::Assessment;
pub use candidate::{Candidate, InterviewStatus, Level, Technology};
pub use entity::{Entity, EntityId, Scoped};
pub use evaluation::Evaluation;
pub use interview_schedule::InterviewSchedule;
pub use offer_template::OfferTemplate;
pub use user::User;
