//! Main record generator for producing `users` and `posts` rows.

use crate::records::{PostRecord, UserRecord};
use crate::text::truncate_at_word;
use crate::unique::EmailTracker;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// How many draws a unique email gets before the generator gives up.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Upper bound on the length of a post body, in characters.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Exclusive upper bound of the number appended to a colliding email's local part.
const EMAIL_SUFFIX_MAX: u32 = 1_000_000;

/// Word count range of a post title (4 to 8 words).
pub const TITLE_WORDS: Range<usize> = 4..9;

/// Sentences per lorem paragraph appended to a post body.
const PARAGRAPH_SENTENCES: Range<usize> = 3..7;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The unique email space ran dry.
    #[error(
        "unique email space exhausted after {attempts} attempts ({generated} emails generated)"
    )]
    Exhausted { attempts: usize, generated: usize },

    /// Posts were requested but there is no user id to reference.
    #[error("cannot generate posts without users (max user id is 0)")]
    NoUsers,
}

/// Generator of synthetic user and post records.
///
/// Each instance owns its RNG and its email uniqueness tracker; two
/// generators never share state.
pub struct RecordGenerator {
    seed: u64,
    rng: StdRng,
    emails: EmailTracker,
}

impl RecordGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            emails: EmailTracker::new(),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Emails handed out so far.
    pub fn emails(&self) -> &EmailTracker {
        &self.emails
    }

    /// Generate the next user with a session-unique email.
    pub fn next_user(&mut self) -> Result<UserRecord, GeneratorError> {
        let name: String = Name().fake_with_rng(&mut self.rng);
        let rng = &mut self.rng;
        let email = draw_unique(&mut self.emails, MAX_UNIQUE_ATTEMPTS, |attempt| {
            let email: String = SafeEmail().fake_with_rng(&mut *rng);
            if attempt == 0 {
                email
            } else {
                with_suffix(&email, rng.gen_range(1..EMAIL_SUFFIX_MAX))
            }
        })?;

        Ok(UserRecord { name, email })
    }

    /// Generate the next post, referencing a user id in `[1, max_user_id]`.
    pub fn next_post(&mut self, max_user_id: u64) -> Result<PostRecord, GeneratorError> {
        if max_user_id == 0 {
            return Err(GeneratorError::NoUsers);
        }

        let user_id = self.rng.gen_range(1..=max_user_id);
        let title: String = Sentence(TITLE_WORDS).fake_with_rng(&mut self.rng);
        let content = self.content();

        Ok(PostRecord {
            user_id,
            title,
            content,
        })
    }

    /// Generate `count` users.
    pub fn users(&mut self, count: usize) -> Result<Vec<UserRecord>, GeneratorError> {
        (0..count).map(|_| self.next_user()).collect()
    }

    /// Generate `count` posts referencing users in `[1, max_user_id]`.
    pub fn posts(
        &mut self,
        count: usize,
        max_user_id: u64,
    ) -> Result<Vec<PostRecord>, GeneratorError> {
        (0..count).map(|_| self.next_post(max_user_id)).collect()
    }

    fn content(&mut self) -> String {
        let mut body = String::new();
        while body.chars().count() < MAX_CONTENT_CHARS {
            let paragraph: String = Paragraph(PARAGRAPH_SENTENCES).fake_with_rng(&mut self.rng);
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(&paragraph);
        }
        truncate_at_word(&body, MAX_CONTENT_CHARS)
    }
}

/// Append `suffix` to the local part of `email`.
fn with_suffix(email: &str, suffix: u32) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}{suffix}@{domain}"),
        None => format!("{email}{suffix}"),
    }
}

/// Draw values until one is not yet in `tracker`, at most `max_attempts` times.
///
/// `draw` gets the zero-based attempt number.
fn draw_unique(
    tracker: &mut EmailTracker,
    max_attempts: usize,
    mut draw: impl FnMut(usize) -> String,
) -> Result<String, GeneratorError> {
    for attempt in 0..max_attempts {
        let candidate = draw(attempt);
        if tracker.insert(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::Exhausted {
        attempts: max_attempts,
        generated: tracker.len(),
    })
}
