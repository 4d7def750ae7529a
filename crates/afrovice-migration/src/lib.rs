pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_roles;
mod m20250101_000002_create_users;
mod m20250101_000003_create_music_genders;
mod m20250101_000004_create_artists;
mod m20250101_000005_create_artist_genders;
mod m20250101_000006_create_events;
mod m20250101_000007_create_presentations;
mod m20250101_000008_create_presentation_artists;
mod m20250101_000009_create_tickets;
mod m20250101_000010_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_roles::Migration),
            Box::new(m20250101_000002_create_users::Migration),
            Box::new(m20250101_000003_create_music_genders::Migration),
            Box::new(m20250101_000004_create_artists::Migration),
            Box::new(m20250101_000005_create_artist_genders::Migration),
            Box::new(m20250101_000006_create_events::Migration),
            Box::new(m20250101_000007_create_presentations::Migration),
            Box::new(m20250101_000008_create_presentation_artists::Migration),
            Box::new(m20250101_000009_create_tickets::Migration),
            Box::new(m20250101_000010_create_comments::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_migration_names_are_unique() {
        let mut names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        names.dedup();
        assert_eq!(names.len(), 10);
    }
}
