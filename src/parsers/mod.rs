//! Extractors for the two kinds of catalog pages.
//!
//! `listing` handles result pages with many titles, `watch` handles a single
//! title's player page. Both sit on top of the selector queries in `html`.

pub mod html;
pub mod listing;
pub mod watch;
