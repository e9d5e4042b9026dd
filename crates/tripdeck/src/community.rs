//! The community feed.
//!
//! Free-text posts attributed to the saved profile (or an anonymous label),
//! stored append-only under `travel.posts`. Display reverses the stored
//! order so the newest post comes first; storage itself is never reordered,
//! edited, or pruned.

use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile;
use crate::store::{keys, Store};

/// Author used when no profile is saved.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous Traveler";

/// A community feed post.
///
/// The author is a snapshot of the profile name at posting time; later
/// profile edits do not change old posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    /// Author name captured at posting time.
    pub author: String,
    /// The message body, trimmed.
    pub message: String,
    /// Posting time as epoch milliseconds.
    pub created_at: i64,
}

/// Load the stored posts in append order.
#[must_use]
pub fn load(store: &Store) -> Vec<CommunityPost> {
    store.get(keys::POSTS, Vec::new())
}

/// Append a post attributed to the current profile and persist.
///
/// Falls back to [`ANONYMOUS_AUTHOR`] when no profile is saved or the saved
/// name is empty.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn submit(store: &Store, message: &str) -> Result<CommunityPost> {
    let author = profile::load(store)
        .map(|profile| profile.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

    let post = CommunityPost {
        author,
        message: message.trim().to_string(),
        created_at: Utc::now().timestamp_millis(),
    };

    let mut posts = load(store);
    posts.push(post.clone());
    store.set(keys::POSTS, &posts)?;
    Ok(post)
}

/// Render the feed newest-first.
///
/// Each post shows author, message, and a local-time timestamp. An empty
/// collection renders a single placeholder line.
#[must_use]
pub fn render(posts: &[CommunityPost]) -> String {
    if posts.is_empty() {
        return "No community posts yet.".to_string();
    }

    posts
        .iter()
        .rev()
        .map(|post| {
            format!(
                "{}: {}\n    {}",
                post.author,
                post.message,
                format_timestamp(post.created_at)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format epoch milliseconds as a local date-time string.
fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileInput;

    fn create_test_store() -> Store {
        Store::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_submit_anonymous_without_profile() {
        let store = create_test_store();
        let post = submit(&store, "hello").unwrap();
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
        assert_eq!(post.message, "hello");
    }

    #[test]
    fn test_submit_uses_profile_name() {
        let store = create_test_store();
        profile::save(
            &store,
            &ProfileInput {
                name: "Ada".to_string(),
                email: String::new(),
                home_city: String::new(),
            },
        )
        .unwrap();

        let post = submit(&store, "first post").unwrap();
        assert_eq!(post.author, "Ada");
    }

    #[test]
    fn test_submit_empty_profile_name_is_anonymous() {
        let store = create_test_store();
        profile::save(&store, &ProfileInput::default()).unwrap();

        let post = submit(&store, "hi").unwrap();
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_author_is_a_snapshot() {
        let store = create_test_store();
        profile::save(
            &store,
            &ProfileInput {
                name: "Ada".to_string(),
                ..ProfileInput::default()
            },
        )
        .unwrap();
        submit(&store, "old post").unwrap();

        profile::save(
            &store,
            &ProfileInput {
                name: "Grace".to_string(),
                ..ProfileInput::default()
            },
        )
        .unwrap();

        let posts = load(&store);
        assert_eq!(posts[0].author, "Ada");
    }

    #[test]
    fn test_submit_trims_message() {
        let store = create_test_store();
        let post = submit(&store, "  spaced out  ").unwrap();
        assert_eq!(post.message, "spaced out");
    }

    #[test]
    fn test_storage_keeps_append_order() {
        let store = create_test_store();
        submit(&store, "a").unwrap();
        submit(&store, "b").unwrap();

        let posts = load(&store);
        assert_eq!(posts[0].message, "a");
        assert_eq!(posts[1].message, "b");
    }

    #[test]
    fn test_render_newest_first() {
        let store = create_test_store();
        submit(&store, "a").unwrap();
        submit(&store, "b").unwrap();

        let output = render(&load(&store));
        let b = output.find(": b").unwrap();
        let a = output.find(": a").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_render_empty_placeholder() {
        assert_eq!(render(&[]), "No community posts yet.");
    }

    #[test]
    fn test_render_does_not_mutate_order() {
        let store = create_test_store();
        submit(&store, "a").unwrap();
        submit(&store, "b").unwrap();

        let posts = load(&store);
        let _ = render(&posts);
        assert_eq!(posts[0].message, "a");

        // Stored order unchanged after a re-read too.
        let reread = load(&store);
        assert_eq!(reread[0].message, "a");
        assert_eq!(reread[1].message, "b");
    }

    #[test]
    fn test_post_persisted_field_names() {
        let post = CommunityPost {
            author: "Ada".to_string(),
            message: "hello".to_string(),
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_format_timestamp_known_value() {
        // Just checks shape; the rendered value depends on the local zone.
        let formatted = format_timestamp(1_700_000_000_000);
        assert_eq!(formatted.len(), "2023-11-14 22:13:20".len());
    }
}
