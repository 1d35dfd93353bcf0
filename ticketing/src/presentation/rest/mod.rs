mod dto;
mod error;
mod extract;
mod handlers;
mod router;

pub use dto::*;
pub use error::ApiError;
pub use extract::ApiJson;
pub use router::{AppState, create_router};
