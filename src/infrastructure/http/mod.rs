pub mod middleware;
pub mod router;
pub mod session;
