//! Authentication and authorization
//!
//! JWT-based authentication (Argon2 password hashing), role-based permission
//! resolution, ordered route gating, and first-run bootstrap.

pub mod bootstrap;
pub mod extractor;
pub mod gate;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod resolver;
pub mod roles;

pub use gate::{RouteGate, RouteRule};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use resolver::{authorize, authorize_any, resolve_permissions};
