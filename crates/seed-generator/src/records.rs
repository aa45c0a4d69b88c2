//! Generated row types.

/// A row destined for the `users` table.
///
/// `id` and `created_at` are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// A row destined for the `posts` table.
///
/// `user_id` references a `users.id` by value only; there is no foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub user_id: u64,
    pub title: String,
    pub content: String,
}
