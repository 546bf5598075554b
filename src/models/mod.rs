pub mod job;
pub mod review;
pub mod skill;
pub mod user;

pub use job::{JobPost, JobStatus};
pub use review::{MAX_RATING, MIN_RATING, Review};
pub use skill::Skill;
pub use user::{
    Account, AdminProfile, EmployerProfile, RatingTally, Role, User, WorkerProfile, WorkerStatus,
};
