//! Localized content loading.
//!
//! Each content kind lives in one JSON document per language, named
//! `<kind>_<lang>.json`. Loading never fails from the caller's point of view:
//! a missing or broken document is replaced wholesale by the default
//! language's document, and when that is broken too, by an empty document.
//! Documents are re-read on every call; nothing is cached.

mod documents;

pub use documents::{
    ContentDocument, EducationItem, EducationList, ExperienceItem, ExperienceList, Profile,
    ProjectItem, ProjectList,
};

use crate::i18n::Language;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Profile,
    Experience,
    Education,
    Projects,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Profile => "profile",
            ContentKind::Experience => "experience",
            ContentKind::Education => "education",
            ContentKind::Projects => "projects",
        }
    }

    /// Document name for this kind in `language`, e.g. `experience_fr`.
    pub fn document_name(&self, language: Language) -> String {
        format!("{}_{}", self.as_str(), language.code())
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which document a load ended up returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The requested language's document
    Primary,
    /// The default language's document, after the requested one failed
    Fallback,
    /// The zero value, after every candidate failed
    Empty,
}

/// A loaded document together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub document: T,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    pub fn into_inner(self) -> T {
        self.document
    }
}

/// Reads content documents from a directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn document_path(&self, kind: ContentKind, language: Language) -> PathBuf {
        self.dir
            .join(format!("{}.json", kind.document_name(language)))
    }

    /// Read and decode exactly one document, surfacing any failure.
    pub async fn read<D: ContentDocument>(&self, language: Language) -> Result<D, ContentError> {
        let path = self.document_path(D::KIND, language);

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| ContentError::Decode { path, source })
    }

    /// Load a document for `language`, falling back to the default language
    /// and then to the empty document.
    ///
    /// Read and decode failures are treated the same and are only logged.
    pub async fn load<D: ContentDocument>(&self, language: Language) -> Loaded<D> {
        match self.read::<D>(language).await {
            Ok(document) => {
                return Loaded {
                    document,
                    source: LoadSource::Primary,
                }
            }
            Err(e) => warn!("Error loading {} ({}): {}", D::KIND, language, e),
        }

        if !language.is_canonical() {
            let default = Language::canonical();
            match self.read::<D>(default).await {
                Ok(document) => {
                    return Loaded {
                        document,
                        source: LoadSource::Fallback,
                    }
                }
                Err(e) => warn!("Error loading fallback {} ({}): {}", D::KIND, default, e),
            }
        }

        error!(
            "No usable {} document for {}, serving empty content",
            D::KIND,
            language
        );
        Loaded {
            document: D::default(),
            source: LoadSource::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Helper Functions ====================

    fn write_doc(dir: &TempDir, name: &str, body: &str) {
        std::fs::write(dir.path().join(format!("{}.json", name)), body)
            .expect("Failed to write document");
    }

    fn profile_json(title: &str) -> String {
        format!(r#"{{"Title": "{}", "Text": "Hello"}}"#, title)
    }

    // ==================== ContentKind Tests ====================

    #[test]
    fn test_document_names() {
        assert_eq!(ContentKind::Profile.document_name(Language::ENGLISH), "profile_en");
        assert_eq!(ContentKind::Experience.document_name(Language::FRENCH), "experience_fr");
        assert_eq!(ContentKind::Education.document_name(Language::FRENCH), "education_fr");
        assert_eq!(ContentKind::Projects.document_name(Language::ENGLISH), "projects_en");
    }

    #[test]
    fn test_document_path_is_inside_store_dir() {
        let store = ContentStore::new("/srv/site/data");
        assert_eq!(
            store.document_path(ContentKind::Projects, Language::FRENCH),
            PathBuf::from("/srv/site/data/projects_fr.json")
        );
    }

    // ==================== load Tests ====================

    #[tokio::test]
    async fn test_load_primary_document() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "profile_en", &profile_json("Engineer"));
        write_doc(&dir, "profile_fr", &profile_json("Ingénieur"));

        let loaded = ContentStore::new(dir.path()).load::<Profile>(Language::FRENCH).await;

        assert_eq!(loaded.source, LoadSource::Primary);
        assert_eq!(loaded.document.title, "Ingénieur");
    }

    #[tokio::test]
    async fn test_missing_language_falls_back_to_default_document() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "profile_en", &profile_json("Engineer"));

        let store = ContentStore::new(dir.path());
        let loaded = store.load::<Profile>(Language::FRENCH).await;
        let english = store.read::<Profile>(Language::ENGLISH).await.unwrap();

        assert_eq!(loaded.source, LoadSource::Fallback);
        assert_eq!(loaded.document, english);
    }

    #[tokio::test]
    async fn test_corrupt_language_document_falls_back_wholesale() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "experience_en", r#"{"ExperienceItems": [{"Title": "Dev"}]}"#);
        // Valid prefix, truncated body: nothing from it may leak into the result
        write_doc(&dir, "experience_fr", r#"{"ExperienceItems": [{"Title": "Développeur"}"#);

        let loaded = ContentStore::new(dir.path())
            .load::<ExperienceList>(Language::FRENCH)
            .await;

        assert_eq!(loaded.source, LoadSource::Fallback);
        assert_eq!(loaded.document.experience_items.len(), 1);
        assert_eq!(loaded.document.experience_items[0].title, "Dev");
    }

    #[tokio::test]
    async fn test_both_documents_missing_yields_empty() {
        let dir = TempDir::new().unwrap();

        let loaded = ContentStore::new(dir.path())
            .load::<ProjectList>(Language::FRENCH)
            .await;

        assert_eq!(loaded.source, LoadSource::Empty);
        assert_eq!(loaded.document, ProjectList::default());
    }

    #[tokio::test]
    async fn test_both_documents_corrupt_yields_empty() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "education_en", "not json");
        write_doc(&dir, "education_fr", r#"{"EducationItems": 42}"#);

        let loaded = ContentStore::new(dir.path())
            .load::<EducationList>(Language::FRENCH)
            .await;

        assert_eq!(loaded.source, LoadSource::Empty);
        assert!(loaded.document.education_items.is_empty());
    }

    #[tokio::test]
    async fn test_default_language_failure_goes_straight_to_empty() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "profile_en", "{");
        write_doc(&dir, "profile_fr", &profile_json("Ingénieur"));

        let loaded = ContentStore::new(dir.path()).load::<Profile>(Language::ENGLISH).await;

        assert_eq!(loaded.source, LoadSource::Empty);
        assert_eq!(loaded.into_inner(), Profile::default());
    }

    #[tokio::test]
    async fn test_missing_directory_yields_empty() {
        let store = ContentStore::new("/definitely/not/a/content/dir");
        for language in [Language::ENGLISH, Language::FRENCH] {
            assert_eq!(store.load::<Profile>(language).await.source, LoadSource::Empty);
        }
    }

    // ==================== read Tests ====================

    #[tokio::test]
    async fn test_read_distinguishes_io_and_decode_errors() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "profile_en", "[1, 2");
        let store = ContentStore::new(dir.path());

        let decode = store.read::<Profile>(Language::ENGLISH).await.unwrap_err();
        assert!(matches!(decode, ContentError::Decode { .. }));
        assert!(decode.to_string().contains("profile_en.json"));

        let io = store.read::<Profile>(Language::FRENCH).await.unwrap_err();
        assert!(matches!(io, ContentError::Io { .. }));
    }

    #[tokio::test]
    async fn test_bundled_site_content_decodes() {
        let store = ContentStore::new(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("site/data"));

        for language in [Language::ENGLISH, Language::FRENCH] {
            assert_eq!(store.load::<Profile>(language).await.source, LoadSource::Primary);
            assert_eq!(store.load::<ExperienceList>(language).await.source, LoadSource::Primary);
            assert_eq!(store.load::<EducationList>(language).await.source, LoadSource::Primary);
            assert_eq!(store.load::<ProjectList>(language).await.source, LoadSource::Primary);
        }
    }

    #[tokio::test]
    async fn test_documents_are_reread_on_every_load() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "profile_en", &profile_json("Before"));
        let store = ContentStore::new(dir.path());

        assert_eq!(store.load::<Profile>(Language::ENGLISH).await.document.title, "Before");
        write_doc(&dir, "profile_en", &profile_json("After"));
        assert_eq!(store.load::<Profile>(Language::ENGLISH).await.document.title, "After");
    }
}
