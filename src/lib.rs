pub use champions::compute_champions;
pub use eligibility::{validate_registration, RegistrationCheck};
pub use error::{MeetError, Result};
pub use scoring::score_event;
pub use snapshot::MeetSnapshot;
pub use standings::compute_standings;

pub mod champions;
pub mod eligibility;
pub mod error;
pub mod model;
pub mod scoring;
pub mod snapshot;
pub mod standings;
