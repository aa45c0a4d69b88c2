//! Record generator for the fake-db-seed load testing tool.
//!
//! This crate provides the `RecordGenerator` which produces synthetic `users`
//! and `posts` rows. The generator owns a seeded RNG, so the same seed yields
//! the same sequence of records, and a session-scoped `EmailTracker` that keeps
//! generated emails pairwise distinct.
//!
//! # Architecture
//!
//! ```text
//!   seed (u64)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - EmailTracker  │
//! └────────┬─────────┘
//!          │
//!          ├──▶ UserRecord { name, email }
//!          └──▶ PostRecord { user_id, title, content }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(42);
//! let user = generator.next_user().unwrap();
//! let post = generator.next_post(100).unwrap();
//! assert!((1..=100).contains(&post.user_id));
//! println!("{} <{}>: {}", user.name, user.email, post.title);
//! ```

pub mod generator;
pub mod records;
pub mod text;
pub mod unique;

pub use generator::{
    GeneratorError, RecordGenerator, MAX_CONTENT_CHARS, MAX_UNIQUE_ATTEMPTS, TITLE_WORDS,
};
pub use records::{PostRecord, UserRecord};
pub use unique::EmailTracker;
