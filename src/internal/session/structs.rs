pub mod session_error;
pub mod transfer_session;

pub use session_error::SessionError;
pub use transfer_session::TransferSession;
