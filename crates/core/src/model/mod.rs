mod api_settings;
mod chat;
mod profile;
mod program;
mod question;
mod score;
mod session;

pub use api_settings::{ApiSettings, ApiSettingsDraft, ApiSettingsError};
pub use chat::ChatEntry;
pub use profile::{Profile, ProfileDraft, ProfileError, ProfilePhoto, Year};
pub use program::{ParseProgramError, Program};
pub use question::{Question, QuestionError};
pub use score::ScoreEntry;
pub use session::Session;
