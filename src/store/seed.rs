//! Demo dataset loaded into a fresh store.

/// Author names, inserted in order so they receive ids 1, 2, 3.
pub const AUTHORS: &[&str] = &["J. K. Rowling", "J. R. R. Tolkien", "Brent Weeks"];

/// `(name, author_id)` pairs, inserted in order so they receive ids 1 through 8.
pub const BOOKS: &[(&str, i32)] = &[
    ("Harry Potter and the Chamber of Secrets", 1),
    ("Harry Potter and the Prisoner of Azkaban", 1),
    ("Harry Potter and the Goblet of Fire", 1),
    ("The Fellowship of the Ring", 2),
    ("The Two Towers", 2),
    ("The Return of the King", 2),
    ("The Way of Shadows", 3),
    ("Beyond the Shadows", 3),
];
