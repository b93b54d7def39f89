//! Client-side application logic for the file sharing app.
//!
//! State lives in plain structs mutated by their methods; anything that
//! touches the outside world (clipboard, notifications, the browser save
//! dialog) is returned as an [`Effect`] for the shell to execute. Backend
//! access goes through the collaborator traits in `fileshare-identity` and
//! `fileshare-storage` so every state machine here is testable against
//! in-memory doubles.

mod effect;
mod files;
mod login;
mod team;
mod upload;

pub use effect::Effect;
pub use files::{download, DownloadError, FilesState, FilesView};
pub use login::{AuthStatus, LoginInput, LoginState};
pub use team::{AddOutcome, Role, TeamMember, TeamState};
pub use upload::{
    PendingFile, UploadError, UploadLimits, UploadPipeline, UploadStage, UploadTask,
    DEFAULT_MAX_UPLOAD_BYTES,
};
