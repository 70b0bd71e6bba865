pub mod claims;
pub mod extractor;
pub mod jwt;
pub mod utils;

pub use claims::Claims;
pub use extractor::AuthenticatedUser;
pub use jwt::JwtService;
pub use utils::{require_faculty, require_owner_or_faculty};
