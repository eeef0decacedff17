//! Upload kinds, file validation, and on-disk storage.
//!
//! Each upload kind owns its destination directory, filename prefix, and
//! extension/MIME/size allow-lists. Stored files are named
//! `<kind>-<timestamp>-<random>.<ext>` so concurrent uploads of
//! identically-named sources never collide.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::fs;
use tracing::debug;

/// Kinds of file the API accepts, keyed by multipart field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Image,
    Resume,
}

impl UploadKind {
    /// Resolve a multipart field name to its upload kind. Unrecognized
    /// field names have no kind and are rejected by the pipeline.
    pub fn from_field(name: &str) -> Option<Self> {
        match name {
            "image" => Some(Self::Image),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }

    /// Subdirectory under the upload base directory.
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Resume => "resumes",
        }
    }

    /// Filename prefix for stored files of this kind.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Resume => "resume",
        }
    }

    pub const fn max_bytes(self) -> usize {
        match self {
            Self::Image => 5 * 1024 * 1024,
            Self::Resume => 10 * 1024 * 1024,
        }
    }

    pub const fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpeg", "jpg", "png", "gif", "webp"],
            Self::Resume => &["pdf", "doc", "docx"],
        }
    }

    pub const fn allowed_mime_types(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["image/jpeg", "image/png", "image/gif", "image/webp"],
            Self::Resume => &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
        }
    }
}

/// Metadata about an uploaded file, taken from the multipart field.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Error type for upload validation and storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Multipart file field name has no configured upload kind.
    UnexpectedField { field: String },

    /// Image failed the extension or content-type allow-list.
    InvalidImageType { filename: String, mime_type: String },

    /// Resume failed the extension or content-type allow-list.
    InvalidResumeType { filename: String, mime_type: String },

    /// A single file exceeds its kind's size limit.
    FileTooLarge {
        kind: &'static str,
        max_bytes: usize,
    },

    /// The request's files together exceed the combined budget.
    CombinedTooLarge { max_bytes: usize },

    /// I/O error while creating directories or writing the file.
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedField { field } => {
                write!(f, "Unexpected file field '{}'", field)
            }
            Self::InvalidImageType {
                filename,
                mime_type,
            } => {
                write!(
                    f,
                    "Only jpeg, jpg, png, gif and webp images are allowed (got '{}' as {})",
                    filename, mime_type
                )
            }
            Self::InvalidResumeType {
                filename,
                mime_type,
            } => {
                write!(
                    f,
                    "Only pdf, doc and docx resumes are allowed (got '{}' as {})",
                    filename, mime_type
                )
            }
            Self::FileTooLarge { kind, max_bytes } => {
                write!(f, "{} exceeds the maximum size of {} bytes", kind, max_bytes)
            }
            Self::CombinedTooLarge { max_bytes } => {
                write!(
                    f,
                    "Uploaded files exceed the combined maximum size of {} bytes",
                    max_bytes
                )
            }
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Validate a file against its kind's size and type allow-lists.
///
/// Images must pass both the extension and content-type checks; resumes
/// additionally require an exact content-type match, so extension spoofing
/// does not get a disallowed document through.
pub fn validate(kind: UploadKind, meta: &FileMetadata) -> Result<(), StorageError> {
    if meta.size_bytes > kind.max_bytes() {
        return Err(StorageError::FileTooLarge {
            kind: kind.prefix(),
            max_bytes: kind.max_bytes(),
        });
    }

    let ext_ok = extension_of(&meta.filename)
        .map(|ext| kind.allowed_extensions().contains(&ext.as_str()))
        .unwrap_or(false);
    let mime_ok = kind.allowed_mime_types().contains(&meta.mime_type.as_str());

    if !ext_ok || !mime_ok {
        return Err(match kind {
            UploadKind::Image => StorageError::InvalidImageType {
                filename: meta.filename.clone(),
                mime_type: meta.mime_type.clone(),
            },
            UploadKind::Resume => StorageError::InvalidResumeType {
                filename: meta.filename.clone(),
                mime_type: meta.mime_type.clone(),
            },
        });
    }

    Ok(())
}

/// Generate a collision-resistant storage key for a file, preserving the
/// original extension: `<dir>/<kind>-<timestamp_millis>-<random>.<ext>`.
pub fn generate_key(kind: UploadKind, filename: &str) -> String {
    let ext = extension_of(filename).unwrap_or_else(|| "bin".to_string());
    let timestamp = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    format!(
        "{}/{}-{}-{}.{}",
        kind.dir(),
        kind.prefix(),
        timestamp,
        suffix,
        ext
    )
}

fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Local-disk storage for uploaded files.
///
/// Files live under `base_dir` in a kind-specific subdirectory and are
/// served statically by the router.
#[derive(Debug, Clone)]
pub struct UploadStorage {
    base_dir: PathBuf,
}

impl UploadStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create the per-kind destination directories. Idempotent; invoked
    /// once at process startup.
    pub async fn init_dirs(&self) -> Result<(), StorageError> {
        for kind in [UploadKind::Image, UploadKind::Resume] {
            fs::create_dir_all(self.base_dir.join(kind.dir())).await?;
        }
        Ok(())
    }

    /// Validate and write a file, returning its storage key.
    pub async fn save(
        &self,
        kind: UploadKind,
        meta: &FileMetadata,
        content: &[u8],
    ) -> Result<String, StorageError> {
        validate(kind, meta)?;

        let key = generate_key(kind, &meta.filename);
        let path = self.base_dir.join(&key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await?;

        debug!(key = %key, size_bytes = content.len(), "Stored uploaded file");

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(filename: &str, mime_type: &str, size_bytes: usize) -> FileMetadata {
        FileMetadata {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn field_names_resolve_to_kinds() {
        assert_eq!(UploadKind::from_field("image"), Some(UploadKind::Image));
        assert_eq!(UploadKind::from_field("resume"), Some(UploadKind::Resume));
        assert_eq!(UploadKind::from_field("avatar"), None);
    }

    #[test]
    fn accepts_every_supported_image_extension() {
        let cases = [
            ("photo.jpeg", "image/jpeg"),
            ("photo.jpg", "image/jpeg"),
            ("photo.png", "image/png"),
            ("photo.gif", "image/gif"),
            ("photo.webp", "image/webp"),
        ];
        for (filename, mime_type) in cases {
            assert!(
                validate(UploadKind::Image, &meta(filename, mime_type, 1024)).is_ok(),
                "{} should be accepted",
                filename
            );
        }
    }

    #[test]
    fn image_extension_check_is_case_insensitive() {
        assert!(validate(UploadKind::Image, &meta("PHOTO.PNG", "image/png", 1024)).is_ok());
    }

    #[test]
    fn rejects_unsupported_image_extensions() {
        for filename in ["chart.bmp", "icon.svg", "shady.exe", "noextension"] {
            let err = validate(UploadKind::Image, &meta(filename, "image/png", 1024)).unwrap_err();
            assert!(
                matches!(err, StorageError::InvalidImageType { .. }),
                "{} should fail with the image-specific error",
                filename
            );
        }
    }

    #[test]
    fn rejects_image_with_mismatched_content_type() {
        let err = validate(UploadKind::Image, &meta("photo.png", "text/plain", 1024)).unwrap_err();
        assert!(matches!(err, StorageError::InvalidImageType { .. }));
    }

    #[test]
    fn accepts_resumes_with_exact_content_types() {
        let cases = [
            ("cv.pdf", "application/pdf"),
            ("cv.doc", "application/msword"),
            (
                "cv.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
        ];
        for (filename, mime_type) in cases {
            assert!(validate(UploadKind::Resume, &meta(filename, mime_type, 1024)).is_ok());
        }
    }

    #[test]
    fn rejects_resume_extension_spoofing() {
        // A .pdf name does not get a non-PDF payload through.
        let err = validate(
            UploadKind::Resume,
            &meta("cv.pdf", "application/octet-stream", 1024),
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::InvalidResumeType { .. }));

        let err = validate(UploadKind::Resume, &meta("cv.odt", "application/pdf", 1024)).unwrap_err();
        assert!(matches!(err, StorageError::InvalidResumeType { .. }));
    }

    #[test]
    fn enforces_per_kind_size_limits() {
        let limit = UploadKind::Image.max_bytes();
        assert!(validate(UploadKind::Image, &meta("photo.png", "image/png", limit)).is_ok());

        let err =
            validate(UploadKind::Image, &meta("photo.png", "image/png", limit + 1)).unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { .. }));

        let limit = UploadKind::Resume.max_bytes();
        assert!(validate(UploadKind::Resume, &meta("cv.pdf", "application/pdf", limit)).is_ok());
        assert!(validate(UploadKind::Resume, &meta("cv.pdf", "application/pdf", limit + 1)).is_err());
    }

    #[test]
    fn generated_keys_are_distinct_for_identical_filenames() {
        let a = generate_key(UploadKind::Image, "photo.png");
        let b = generate_key(UploadKind::Image, "photo.png");

        assert_ne!(a, b);
        assert!(a.starts_with("images/image-"));
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn generated_resume_keys_use_the_resume_directory() {
        let key = generate_key(UploadKind::Resume, "cv.pdf");
        assert!(key.starts_with("resumes/resume-"));
        assert!(key.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn init_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path().to_path_buf());

        storage.init_dirs().await.unwrap();
        storage.init_dirs().await.unwrap();

        assert!(dir.path().join("images").is_dir());
        assert!(dir.path().join("resumes").is_dir());
    }

    #[tokio::test]
    async fn save_writes_under_the_kind_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path().to_path_buf());
        storage.init_dirs().await.unwrap();

        let key = storage
            .save(
                UploadKind::Image,
                &meta("photo.png", "image/png", 4),
                b"\x89PNG",
            )
            .await
            .unwrap();

        let stored = dir.path().join(&key);
        assert!(stored.is_file());
        assert_eq!(std::fs::read(stored).unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn save_rejects_invalid_files_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(dir.path().to_path_buf());
        storage.init_dirs().await.unwrap();

        let err = storage
            .save(
                UploadKind::Image,
                &meta("notes.txt", "text/plain", 4),
                b"text",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidImageType { .. }));

        let images: Vec<_> = std::fs::read_dir(dir.path().join("images"))
            .unwrap()
            .collect();
        assert!(images.is_empty());
    }
}
