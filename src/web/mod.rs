//! Web layer serving the browser-facing landing page.

pub mod handlers;
