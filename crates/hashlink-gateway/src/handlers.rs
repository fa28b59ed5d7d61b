mod health;
mod url;

pub use self::health::health_handler;
pub use self::url::{create_url_handler, not_found_handler, redirect_handler, shorten_handler};
