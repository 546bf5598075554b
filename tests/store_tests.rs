//! Store contract tests against both backends.

use std::path::PathBuf;
use std::sync::Arc;

use kaamchowk::config::{StorageBackend, StorageConfig};
use kaamchowk::db::{FileStore, Namespace, Store};
use kaamchowk::derivations;
use kaamchowk::models::{Review, User, WorkerStatus};

const NOW: i64 = 1_700_000_000_000;

fn seeded() -> Store {
    let store = Store::in_memory();
    store.seed_if_empty(NOW).unwrap();
    store
}

fn review(id: &str, to_id: &str, rating: u8) -> Review {
    Review {
        id: id.to_string(),
        from_id: "e1".to_string(),
        to_id: to_id.to_string(),
        rating,
        comment: None,
        created_at: NOW,
    }
}

fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("kaamchowk-store-test-{}", uuid::Uuid::new_v4()))
}

fn set_status(store: &Store, id: &str, status: WorkerStatus) {
    let mut user = store.find_user(id).unwrap().unwrap();
    if let User::Worker(worker) = &mut user {
        worker.status = status;
    }
    assert!(store.update_user(user).unwrap());
}

#[test]
fn unrated_users_display_new() {
    let store = seeded();
    for user in store.get_users().unwrap() {
        let Some(tally) = user.rating() else { continue };
        if tally.rating_count == 0 {
            assert_eq!(tally.display(), "New");
        } else {
            let avg = f64::from(tally.rating_sum) / f64::from(tally.rating_count);
            assert_eq!(tally.display(), format!("{:.1}", (avg * 10.0).round() / 10.0));
        }
    }

    let e5 = store.find_user("e5").unwrap().unwrap();
    assert_eq!(e5.rating().unwrap().display(), "New");
}

#[test]
fn add_review_twice_counts_twice() {
    let store = seeded();
    let before = store.find_user("w3").unwrap().unwrap().rating().copied().unwrap();

    let r = review("r_1", "w3", 5);
    store.add_review(r.clone()).unwrap();
    store.add_review(r).unwrap();

    let after = store.find_user("w3").unwrap().unwrap().rating().copied().unwrap();
    assert_eq!(after.rating_count, before.rating_count + 2);
    assert_eq!(after.rating_sum, before.rating_sum + 10);
    assert_eq!(store.get_reviews().unwrap().len(), 2);
}

#[test]
fn review_for_admin_or_missing_user_only_appends() {
    let store = seeded();
    let users_before = store.get_users().unwrap();

    store.add_review(review("r_1", "admin1", 4)).unwrap();
    store.add_review(review("r_2", "ghost", 4)).unwrap();

    assert_eq!(store.get_users().unwrap(), users_before);
    assert_eq!(store.get_reviews().unwrap().len(), 2);
}

#[test]
fn approval_moves_worker_between_views() {
    let store = seeded();
    set_status(&store, "w2", WorkerStatus::Pending);

    let users = store.get_users().unwrap();
    let filter = derivations::WorkerFilter::default();
    assert!(derivations::pending_workers(&users, "").iter().any(|w| w.account.id == "w2"));
    assert!(!derivations::find_workers(&users, &filter).iter().any(|w| w.account.id == "w2"));

    set_status(&store, "w2", WorkerStatus::Approved);
    let users = store.get_users().unwrap();
    assert!(!derivations::pending_workers(&users, "").iter().any(|w| w.account.id == "w2"));
    assert!(derivations::find_workers(&users, &filter).iter().any(|w| w.account.id == "w2"));
}

#[test]
fn suspension_hides_worker_from_search() {
    let store = seeded();
    set_status(&store, "w8", WorkerStatus::Suspended);

    let users = store.get_users().unwrap();
    let found = derivations::find_workers(&users, &derivations::WorkerFilter::default());
    assert!(!found.iter().any(|w| w.account.id == "w8"));
    assert_eq!(found.len(), 7);
}

#[test]
fn deleted_job_leaves_every_view() {
    let store = seeded();
    assert!(store.delete_job("j4").unwrap());

    let jobs = store.get_jobs().unwrap();
    assert!(!jobs.iter().any(|j| j.id == "j4"));
    assert!(derivations::employer_jobs(&jobs, "e4").is_empty());
    assert!(!store.delete_job("j4").unwrap());
}

#[test]
fn rewriting_users_is_a_no_op() {
    let store = seeded();
    let users = store.get_users().unwrap();
    store.set_users(&users).unwrap();
    assert_eq!(store.get_users().unwrap(), users);
}

#[test]
fn session_follows_user_lifecycle() {
    let store = seeded();
    for user in store.get_users().unwrap() {
        store.set_current_user(Some(user.id())).unwrap();
        assert_eq!(store.get_current_user().unwrap().unwrap().id(), user.id());
    }

    store.set_current_user(None).unwrap();
    assert!(store.get_current_user().unwrap().is_none());

    store.set_current_user(Some("w5")).unwrap();
    assert!(store.delete_user("w5").unwrap());
    assert!(store.get_current_user().unwrap().is_none());
}

#[test]
fn file_backend_survives_reopen() {
    let dir = temp_data_dir();
    let config = StorageConfig {
        backend: StorageBackend::File,
        data_dir: dir.display().to_string(),
        ..StorageConfig::default()
    };

    {
        let store = Store::open(&config, NOW).unwrap();
        store.add_review(review("r_1", "w1", 1)).unwrap();
        store.set_current_user(Some("e2")).unwrap();
    }

    let reopened = Store::open(&config, NOW + 1).unwrap();
    assert_eq!(reopened.get_reviews().unwrap().len(), 1);
    assert_eq!(reopened.get_current_user().unwrap().unwrap().id(), "e2");
    let w1 = reopened.find_user("w1").unwrap().unwrap();
    assert_eq!(w1.rating().unwrap().rating_count, 6);

    assert!(dir.join("kaamchowk_users_v3.json").exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn persisted_users_use_role_tags_and_camel_case() {
    let dir = temp_data_dir();
    let backend = Arc::new(FileStore::new(&dir).unwrap());
    let store = Store::new(backend, Namespace::default());
    store.seed_if_empty(NOW).unwrap();

    let raw = std::fs::read_to_string(dir.join("kaamchowk_users_v3.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first_worker = json
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["role"] == "worker")
        .unwrap();
    assert_eq!(first_worker["id"], "w1");
    assert!(first_worker["isAvailableToday"].is_boolean());
    assert!(first_worker["ratingSum"].is_number());

    let session = std::fs::read_to_string(dir.join("kaamchowk_current_user_id_v3.json"));
    assert!(session.is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn memory_backend_from_config_is_seeded() {
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        ..StorageConfig::default()
    };
    let store = Store::open(&config, NOW).unwrap();
    assert_eq!(store.get_users().unwrap().len(), 15);
}
