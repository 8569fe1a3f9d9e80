//! Comment-thread flattening and comment-availability classification.

use serde_json::Value;

use crate::error::YoutubeError;

/// Returns `true` when a `/commentThreads` rejection means the video simply
/// has no reachable comments (comments disabled, or the thread collection
/// does not exist) rather than a real failure.
///
/// The API signals this only through the error body text, so the fragile
/// string matching lives here and nowhere else. Callers absorb a matching
/// rejection into an empty, exhausted page.
pub(crate) fn is_comments_unavailable(err: &YoutubeError) -> bool {
    match err {
        YoutubeError::Status { body, .. } => {
            body.contains("disabled") || body.contains("not found")
        }
        _ => false,
    }
}

/// Flattens one page of comment-thread resources into a single sequence
/// where each thread is immediately followed by its embedded replies.
///
/// A thread with a zero `totalReplyCount` contributes only itself. A thread
/// that reports replies but carries no embedded reply payload also
/// contributes only itself — replies beyond the embedded set are not
/// fetched separately. Page order is otherwise preserved.
#[must_use]
pub fn flatten_comment_threads(threads: Vec<Value>) -> Vec<Value> {
    let mut flat = Vec::with_capacity(threads.len());
    for thread in threads {
        let replies = embedded_replies(&thread);
        flat.push(thread);
        flat.extend(replies);
    }
    flat
}

/// The reply comments embedded in a thread resource, if it reports any.
fn embedded_replies(thread: &Value) -> Vec<Value> {
    if total_reply_count(thread) == 0 {
        return Vec::new();
    }
    thread
        .pointer("/replies/comments")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn total_reply_count(thread: &Value) -> u64 {
    thread
        .pointer("/snippet/totalReplyCount")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn thread(id: &str, reply_count: u64, replies: Option<Vec<Value>>) -> Value {
        let mut t = json!({
            "id": id,
            "snippet": { "totalReplyCount": reply_count }
        });
        if let Some(comments) = replies {
            t["replies"] = json!({ "comments": comments });
        }
        t
    }

    fn ids(items: &[Value]) -> Vec<&str> {
        items
            .iter()
            .map(|v| v["id"].as_str().unwrap_or_default())
            .collect()
    }

    #[test]
    fn replies_follow_their_parent() {
        let input = vec![
            thread("a", 0, None),
            thread(
                "b",
                2,
                Some(vec![json!({"id": "b1"}), json!({"id": "b2"})]),
            ),
            thread("c", 0, None),
        ];
        let flat = flatten_comment_threads(input);
        assert_eq!(ids(&flat), vec!["a", "b", "b1", "b2", "c"]);
    }

    #[test]
    fn zero_reply_threads_pass_through() {
        let input = vec![thread("a", 0, None), thread("b", 0, None)];
        let flat = flatten_comment_threads(input);
        assert_eq!(ids(&flat), vec!["a", "b"]);
    }

    #[test]
    fn reported_replies_with_missing_payload_contribute_only_the_thread() {
        let input = vec![thread("a", 3, None), thread("b", 0, None)];
        let flat = flatten_comment_threads(input);
        assert_eq!(ids(&flat), vec!["a", "b"]);
    }

    #[test]
    fn empty_page_flattens_to_empty() {
        assert!(flatten_comment_threads(Vec::new()).is_empty());
    }

    #[test]
    fn disabled_comment_rejection_is_classified_unavailable() {
        let err = YoutubeError::Status {
            status: 403,
            body: r#"{"error":{"message":"The video has disabled comments."}}"#.to_owned(),
        };
        assert!(is_comments_unavailable(&err));
    }

    #[test]
    fn not_found_rejection_is_classified_unavailable() {
        let err = YoutubeError::Status {
            status: 404,
            body: "commentThreads not found".to_owned(),
        };
        assert!(is_comments_unavailable(&err));
    }

    #[test]
    fn other_status_errors_are_not_absorbed() {
        let err = YoutubeError::Status {
            status: 500,
            body: "internal error".to_owned(),
        };
        assert!(!is_comments_unavailable(&err));
    }

    #[test]
    fn non_status_errors_are_not_absorbed() {
        let err = YoutubeError::MissingArgument("a videoId");
        assert!(!is_comments_unavailable(&err));
    }
}
