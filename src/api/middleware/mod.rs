//! API middleware.

mod recovery;
mod security;
mod session;

pub use recovery::handle_panic;
pub use security::security_headers;
pub use session::{
    expired_session_cookie, session_cookie, session_middleware, CurrentUser, Session,
};
