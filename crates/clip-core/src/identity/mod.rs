//! Display-name generation for the local identity.

use rand::Rng;

/// Key under which the display name is persisted.
pub const USERNAME_KEY: &str = "username";

pub const ADJECTIVES: &[&str] = &[
    "Happy", "Lucky", "Clever", "Swift", "Bright", "Cool", "Epic", "Pro",
];

pub const NOUNS: &[&str] = &[
    "Coder", "Dev", "Ninja", "Guru", "Wizard", "Hero", "Master", "Expert",
];

/// Pick an adjective+noun handle such as `SwiftNinja`.
pub fn generate_username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{adjective}{noun}")
}

/// [`generate_username`] with the thread-local generator.
pub fn random_username() -> String {
    generate_username(&mut rand::rng())
}
