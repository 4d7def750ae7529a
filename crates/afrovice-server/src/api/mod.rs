pub mod artist_genders;
pub mod artists;
pub mod comments;
pub mod events;
pub mod genders;
pub mod health;
pub mod presentation_artists;
pub mod presentations;
pub mod roles;
pub mod tickets;
pub mod users;
pub mod wall_clock;

/// Server-side creation stamp applied to every inserted row.
pub fn now() -> chrono::DateTime<chrono::FixedOffset> {
    chrono::Utc::now().fixed_offset()
}
