mod error;
mod health;
mod playback;
mod question;
mod session;
mod upload;

pub use health::health_handler;
pub use playback::playback_handler;
pub use question::question_handler;
pub use session::session_handler;
pub use upload::upload_recording_handler;
