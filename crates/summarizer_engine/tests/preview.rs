use std::fs;
use std::path::PathBuf;

use summarizer_core::{update, AppState, Document, Effect, Msg, PDF_CONTENT_TYPE};
use summarizer_engine::PreviewStore;
use tempfile::TempDir;
use url::Url;

fn doc(name: &str, body: &[u8]) -> Document {
    Document::new(name, PDF_CONTENT_TYPE, body.to_vec())
}

fn path_of(location: &str) -> PathBuf {
    Url::parse(location).unwrap().to_file_path().unwrap()
}

#[test]
fn create_writes_bytes_behind_file_url() {
    let temp = TempDir::new().unwrap();
    let mut store = PreviewStore::in_dir(temp.path().to_path_buf());

    let location = store.create(1, &doc("a.pdf", b"%PDF-1.4 a")).unwrap();

    assert!(location.starts_with("file://"));
    let path = path_of(&location);
    assert!(path.starts_with(temp.path()));
    assert_eq!(path.extension().unwrap(), "pdf");
    assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 a");
    assert_eq!(store.live_count(), 1);
}

#[test]
fn revoke_deletes_the_copy() {
    let temp = TempDir::new().unwrap();
    let mut store = PreviewStore::in_dir(temp.path().to_path_buf());
    let location = store.create(1, &doc("a.pdf", b"%PDF-1.4 a")).unwrap();

    assert!(store.revoke(1));
    assert!(!path_of(&location).exists());
    assert!(!store.is_live(1));
    assert!(!store.revoke(1));
}

#[test]
fn dropping_the_store_releases_everything() {
    let temp = TempDir::new().unwrap();
    let location = {
        let mut store = PreviewStore::in_dir(temp.path().to_path_buf());
        store.create(7, &doc("a.pdf", b"%PDF-1.4 a")).unwrap()
    };

    assert!(!path_of(&location).exists());
}

#[test]
fn selection_changes_never_leave_two_live_previews() {
    let temp = TempDir::new().unwrap();
    let mut store = PreviewStore::in_dir(temp.path().to_path_buf());
    let mut state = AppState::new();
    let mut locations = Vec::new();

    let msgs = vec![
        Msg::DocumentLoaded(Ok(doc("a.pdf", b"%PDF a"))),
        Msg::DocumentLoaded(Ok(doc("b.pdf", b"%PDF b"))),
        Msg::SelectionCleared,
        Msg::DocumentLoaded(Ok(doc("c.pdf", b"%PDF c"))),
        Msg::Shutdown,
    ];

    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            match effect {
                Effect::CreatePreview { preview, document } => {
                    locations.push(store.create(preview, &document).unwrap());
                }
                Effect::RevokePreview { preview } => {
                    assert!(store.revoke(preview));
                }
                other => panic!("unexpected effect {other:?}"),
            }
            assert!(store.live_count() <= 1);
        }
        assert_eq!(store.live_count(), usize::from(state.live_preview().is_some()));
    }

    assert_eq!(locations.len(), 3);
    for location in locations {
        assert!(!path_of(&location).exists());
    }
}

#[test]
fn revoke_all_clears_store() {
    let mut store = PreviewStore::new();
    store.create(1, &doc("a.pdf", b"%PDF a")).unwrap();
    store.create(2, &doc("b.pdf", b"%PDF b")).unwrap();

    store.revoke_all();
    assert_eq!(store.live_count(), 0);
}
