//! Middleware shared by every route.
//!
//! These are all [tower layers], so they work with [`axum`] but do not
//! depend on any particular handler.
//!
//! [tower layers]: https://docs.rs/tower/latest/tower/trait.Layer.html

pub(crate) mod logging;
pub(crate) mod request_id;
pub(crate) mod panic_handler;
pub(crate) mod cors;
