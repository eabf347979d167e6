//! # Page Store
//!
//! Persistence boundary for pages. A page is saved as a single opaque
//! blob keyed by its id; absence is representable (a page that was never
//! saved loads as `None` and the workspace starts it empty).
//!
//! `FsPageStore` keeps one JSON file per page and writes through a temp
//! file + rename so a save is all-or-nothing. `MemoryPageStore` backs
//! tests and can be switched to reject writes, which is how the
//! failed-save isolation contract is exercised.

use chrono::{DateTime, Utc};
use pagecraft_model::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),

    #[error("Store rejected write: {0}")]
    WriteRejected(String),
}

/// Envelope persisted per page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPage {
    pub saved_at: DateTime<Utc>,
    pub page: Page,
}

/// Listing entry for the page picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub section_count: usize,
    pub saved_at: DateTime<Utc>,
}

impl From<&StoredPage> for PageSummary {
    fn from(stored: &StoredPage) -> Self {
        Self {
            id: stored.page.id.clone(),
            title: stored.page.title.clone(),
            section_count: stored.page.sections.len(),
            saved_at: stored.saved_at,
        }
    }
}

/// Persistence contract for pages
pub trait PageStore: Send + Sync {
    /// Retrieve a page; `None` means it was never saved
    fn load(&self, page_id: &str) -> Result<Option<Page>, StoreError>;

    /// Persist a page atomically as a single blob
    fn save(&self, page: &Page) -> Result<(), StoreError>;

    fn list(&self) -> Result<Vec<PageSummary>, StoreError>;

    /// Returns whether the page existed
    fn delete(&self, page_id: &str) -> Result<bool, StoreError>;
}

/// Page ids become file names, so constrain them to a safe alphabet
fn check_page_id(page_id: &str) -> Result<(), StoreError> {
    let ok = !page_id.is_empty()
        && page_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidPageId(page_id.to_string()))
    }
}

/// File-backed store: one `<id>.json` per page under a root directory
pub struct FsPageStore {
    root: PathBuf,
}

impl FsPageStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn page_path(&self, page_id: &str) -> PathBuf {
        self.root.join(format!("{page_id}.json"))
    }
}

impl PageStore for FsPageStore {
    fn load(&self, page_id: &str) -> Result<Option<Page>, StoreError> {
        check_page_id(page_id)?;
        let raw = match fs::read_to_string(self.page_path(page_id)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredPage = serde_json::from_str(&raw)?;
        Ok(Some(stored.page))
    }

    fn save(&self, page: &Page) -> Result<(), StoreError> {
        check_page_id(&page.id)?;
        let stored = StoredPage {
            saved_at: Utc::now(),
            page: page.clone(),
        };
        let blob = serde_json::to_vec_pretty(&stored)?;

        // Write-then-rename keeps a crashed save from leaving a torn file
        let path = self.page_path(&page.id);
        let tmp = self.root.join(format!("{}.json.tmp", page.id));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<PageSummary>, StoreError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<StoredPage>(&raw) {
                Ok(stored) => summaries.push(PageSummary::from(&stored)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable page file");
                }
            }
        }
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    fn delete(&self, page_id: &str) -> Result<bool, StoreError> {
        check_page_id(page_id)?;
        match fs::remove_file(self.page_path(page_id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests, with switchable save-failure injection
#[derive(Default)]
pub struct MemoryPageStore {
    pages: Mutex<HashMap<String, StoredPage>>,
    reject_writes: AtomicBool,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (and succeed again when unset)
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self, page_id: &str) -> Result<Option<Page>, StoreError> {
        check_page_id(page_id)?;
        let pages = self.pages.lock().unwrap();
        Ok(pages.get(page_id).map(|stored| stored.page.clone()))
    }

    fn save(&self, page: &Page) -> Result<(), StoreError> {
        check_page_id(&page.id)?;
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected("injected failure".to_string()));
        }
        let mut pages = self.pages.lock().unwrap();
        pages.insert(
            page.id.clone(),
            StoredPage {
                saved_at: Utc::now(),
                page: page.clone(),
            },
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<PageSummary>, StoreError> {
        let pages = self.pages.lock().unwrap();
        let mut summaries: Vec<PageSummary> = pages.values().map(PageSummary::from).collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    fn delete(&self, page_id: &str) -> Result<bool, StoreError> {
        check_page_id(page_id)?;
        let mut pages = self.pages.lock().unwrap();
        Ok(pages.remove(page_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{Section, SectionKind};

    fn sample_page(id: &str) -> Page {
        let mut page = Page::new(id);
        page.sections.push(Section::new(SectionKind::Hero));
        page.sections.push(Section::new(SectionKind::Footer));
        page
    }

    #[test]
    fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPageStore::new(dir.path()).unwrap();

        let page = sample_page("landing");
        store.save(&page).unwrap();

        let loaded = store.load("landing").unwrap().unwrap();
        assert_eq!(loaded, page);
    }

    #[test]
    fn test_fs_store_missing_page_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPageStore::new(dir.path()).unwrap();
        assert!(store.load("never-saved").unwrap().is_none());
    }

    #[test]
    fn test_fs_store_overwrite_keeps_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPageStore::new(dir.path()).unwrap();

        let mut page = sample_page("landing");
        store.save(&page).unwrap();

        page.title = "Renamed".to_string();
        page.sections.pop();
        store.save(&page).unwrap();

        let loaded = store.load("landing").unwrap().unwrap();
        assert_eq!(loaded.title, "Renamed");
        assert_eq!(loaded.sections.len(), 1);
    }

    #[test]
    fn test_fs_store_list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPageStore::new(dir.path()).unwrap();

        store.save(&sample_page("a")).unwrap();
        store.save(&sample_page("b")).unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "a");
        assert_eq!(summaries[0].section_count, 2);

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_page_id_validation() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPageStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.load("../escape"),
            Err(StoreError::InvalidPageId(_))
        ));
        assert!(matches!(store.load(""), Err(StoreError::InvalidPageId(_))));
        assert!(store.load("ok-id_2").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let store = MemoryPageStore::new();
        let page = sample_page("landing");

        store.reject_writes(true);
        assert!(matches!(
            store.save(&page),
            Err(StoreError::WriteRejected(_))
        ));
        assert!(store.load("landing").unwrap().is_none());

        store.reject_writes(false);
        store.save(&page).unwrap();
        assert!(store.load("landing").unwrap().is_some());
    }
}
