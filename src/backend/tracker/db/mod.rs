//! Tracker Data Access
//!
//! SQL for applications, contacts and tasks. Every read that a controller
//! serves is owner-scoped in the query itself: applications by `user_id`,
//! contacts and tasks through a join on their parent application. An
//! identifier outside that scope is indistinguishable from one that does not
//! exist.
//!
//! Functions take `&mut SqliteConnection` so the same code runs on a pooled
//! connection or inside a transaction (`&mut *tx`).
//!
//! Embedded contact and task summaries for a page of applications are loaded
//! with one query per child table, however many applications are listed.

/// Application queries
pub mod applications;

/// Contact queries
pub mod contacts;

/// Task queries
pub mod tasks;

/// Turn a search term into a `LIKE` pattern matching it anywhere.
///
/// `%`, `_` and `\` in the term match literally; queries pair the pattern
/// with `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
