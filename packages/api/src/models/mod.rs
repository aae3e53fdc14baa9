//! Wire types exchanged with the backend.

mod compare;
mod shared;
mod track;
mod user;

pub use compare::CompareResult;
pub use shared::{format_date, NewShare, ReactRequest, Reaction, SharedSong};
pub use track::{web_url, Artist, LyricQuote, Track};
pub use user::{User, UserId};
