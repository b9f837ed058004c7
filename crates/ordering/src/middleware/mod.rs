mod admin;
mod jwt;
mod validate;

pub use self::admin::require_admin;
pub use self::jwt::auth;
pub use self::validate::ValidatedJson;
