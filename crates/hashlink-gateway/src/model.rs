mod health;
mod url;

pub use self::health::HealthResponse;
pub use self::url::{ErrorResponse, ShortenRequest, ShortenResponse};
