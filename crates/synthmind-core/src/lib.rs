pub mod credential;
pub mod error;
pub mod role;
pub mod session;
pub mod stage;

pub use credential::Credential;
pub use error::{BlockedReason, CredentialError};
pub use role::Role;
pub use session::Session;
pub use stage::{PipelineResult, PipelineState, StageResult};
