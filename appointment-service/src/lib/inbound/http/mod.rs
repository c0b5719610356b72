pub mod handlers;
pub mod messages;
pub mod middleware;
pub mod router;
