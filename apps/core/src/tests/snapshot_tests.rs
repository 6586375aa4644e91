//! Snapshot Tests
//!
//! Locked results read back from disk, including payloads written by the web client.

use crate::error::AppError;
use crate::lyric::{interpret, RULESET_VERSION};
use crate::snapshot::{LockCheck, LockedResult};
use std::fs;
use tempfile::tempdir;

/// Payload shape stored by the browser session page
fn web_client_payload(hash: &str) -> String {
    let result = serde_json::to_value(interpret("sun and gold").result).unwrap();
    serde_json::json!({ "result": result, "lockedTextHash": hash }).to_string()
}

#[cfg(test)]
mod disk_tests {
    use super::*;

    #[test]
    fn test_load_written_snapshot() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("locked.json");

        let locked = interpret("hold the line").lock(Some("session-a".to_string()));
        fs::write(&path, locked.to_json().unwrap()).unwrap();

        let loaded = LockedResult::load(&path).expect("snapshot should load");
        assert_eq!(loaded, locked);
        assert!(!loaded.is_stale("hold the line"));
        assert!(loaded.is_stale("hold the line tighter"));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nope.json");
        assert!(LockedResult::load(&path).is_none());
        assert!(matches!(LockedResult::read(&path), Err(AppError::Io(_))));
    }

    #[test]
    fn test_corrupt_file_is_absent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("locked.json");
        fs::write(&path, "{\"result\": {\"x\": ").unwrap();
        assert!(LockedResult::load(&path).is_none());
    }

    #[test]
    fn test_check_tells_missing_from_unreadable() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.json");
        assert_eq!(LockedResult::check(&missing, "anything"), LockCheck::Missing);

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{\"result\": {\"x\": ").unwrap();
        match LockedResult::check(&corrupt, "anything") {
            LockCheck::Unreadable(reason) => assert!(reason.starts_with("Validation error")),
            other => panic!("expected unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_check_reports_freshness_and_version() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("locked.json");
        let mut locked = interpret("hold the line").lock(None);
        fs::write(&path, locked.to_json().unwrap()).unwrap();

        let fresh = LockedResult::check(&path, "hold the line");
        assert!(fresh.is_fresh());
        assert_eq!(
            fresh,
            LockCheck::Fresh {
                version: RULESET_VERSION.to_string(),
                current_ruleset: true
            }
        );

        locked.result.version = "0.0.1".to_string();
        fs::write(&path, locked.to_json().unwrap()).unwrap();
        assert_eq!(
            LockedResult::check(&path, "let it go"),
            LockCheck::Stale {
                version: "0.0.1".to_string(),
                current_ruleset: false
            }
        );
    }
}

#[cfg(test)]
mod compatibility_tests {
    use super::*;

    #[test]
    fn test_reads_web_client_payload() {
        let hash = interpret("sun and gold").fingerprint;
        let locked = LockedResult::restore(&web_client_payload(&hash))
            .expect("web payload should parse");

        assert!(locked.session_id.is_none());
        assert!(locked.locked_at.is_none());
        assert_eq!(locked.result.version, RULESET_VERSION);
        assert!(!locked.is_stale("sun and gold"));
    }

    #[test]
    fn test_null_hash_is_stale() {
        let payload = serde_json::json!({
            "result": serde_json::to_value(interpret("x").result).unwrap(),
            "lockedTextHash": null
        })
        .to_string();
        let locked = LockedResult::parse(&payload).unwrap();
        assert!(locked.is_stale("x"));
    }

    #[test]
    fn test_unknown_signal_label_is_rejected() {
        let payload = web_client_payload("00000000").replace("\"short\"", "\"epic\"");
        assert!(LockedResult::parse(&payload).is_err());
        assert!(LockedResult::restore(&payload).is_none());
    }
}
