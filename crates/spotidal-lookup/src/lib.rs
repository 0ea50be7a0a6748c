pub mod api;
pub mod parsers;

mod converter;

pub use converter::{TidalConverter, interpret_redirect};
pub use parsers::spotify::{is_spotify_track_url, parse_spotify_track_id};
