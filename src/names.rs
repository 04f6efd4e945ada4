//! Synthetic Name Generator
//!
//! Random human names and places for seeding the list at mount. Any
//! `() -> string` source would do; this one samples fixed tables with
//! `Math.random`.

use crate::models::User;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amara", "Bruno", "Carmen", "Dmitri", "Elena", "Farid", "Greta",
    "Hassan", "Ingrid", "Jonas", "Keiko", "Liam", "Mireille", "Nadia", "Omar",
    "Priya", "Quentin", "Rosa", "Stefan", "Tomoko", "Ulrich", "Valeria",
    "Wendell", "Ximena", "Yusuf", "Zofia",
];

const LAST_NAMES: &[&str] = &[
    "Abe", "Bergström", "Castillo", "Dubois", "Eriksen", "Fontaine", "Gruber",
    "Haddad", "Ivanov", "Jimenez", "Kowalski", "Larsen", "Moreau", "Nakamura",
    "Okafor", "Petrov", "Quispe", "Rossi", "Silva", "Tanaka", "Ueda",
    "Vasquez", "Weber", "Xu", "Yamamoto", "Zhang",
];

const PLACES: &[&str] = &[
    "Aberdeen", "Bariloche", "Cividale", "Dunedin", "Esbjerg", "Fremantle",
    "Galway", "Haarlem", "Innsbruck", "Jaipur", "Kumamoto", "Lausanne",
    "Matera", "Nazaré", "Oaxaca", "Porto", "Quimper", "Rovaniemi", "Setúbal",
    "Tbilisi", "Uppsala", "Valparaíso", "Windhoek", "Xilitla", "Ypres",
    "Zadar",
];

/// Table lookup with wrap-around, so any index is valid.
fn pick(table: &[&'static str], k: usize) -> &'static str {
    table[k % table.len()]
}

fn random_index() -> usize {
    (js_sys::Math::random() * u32::MAX as f64) as usize
}

pub fn random_first() -> &'static str {
    pick(FIRST_NAMES, random_index())
}

pub fn random_last() -> &'static str {
    pick(LAST_NAMES, random_index())
}

pub fn random_place() -> &'static str {
    pick(PLACES, random_index())
}

/// Seed collection for the browser: `count` users with sequential ids and
/// random name/place strings.
pub fn synthetic_users(count: u32) -> Vec<User> {
    (0..count)
        .map(|id| User {
            id,
            name: format!("{} {}", random_first(), random_last()),
            place: random_place().to_string(),
        })
        .collect()
}
