pub mod banner;
pub mod bigtext;
pub mod catalog;
mod common;
mod error;
mod logging;
pub mod notify;
mod response;
pub mod store;
pub mod survey;
pub mod tui;

pub use common::{PROJECT_NAME, PROJECT_VERSION};
pub use error::SurveyError;
pub use logging::Logging;
pub use response::{Choice, Focus, Language, SurveyResponse};
pub use survey::{PromptBackend, ScriptedBackend};
