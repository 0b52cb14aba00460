//! Request-handling core for an anime catalog.
//!
//! Inbound requests are typed commands and queries ([`AnimeRequest`]),
//! validated, routed by an exhaustive match to exactly one handler, which
//! calls the domain service, which calls the persistence gateway. Typed
//! failures ([`AppError`]) propagate back unmodified for the boundary to
//! translate into transport status codes.
//!
//! The HTTP router and the response translator live outside this crate; the
//! crate exposes the dispatcher, the request shapes, and the error taxonomy
//! as its contract.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{AnimeDispatcher, AnimeRequest, AnimeResponse};
pub use domain::entities::Anime;
pub use shared::errors::{AppError, AppResult};
