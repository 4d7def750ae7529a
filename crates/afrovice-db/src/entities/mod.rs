pub mod artist;
pub mod artist_gender;
pub mod comment;
pub mod event;
pub mod music_gender;
pub mod presentation;
pub mod presentation_artist;
pub mod role;
pub mod ticket;
pub mod user;
