use std::env;
use std::path::PathBuf;

const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Uploaded files land under `dir` and are served at [`Self::PUBLIC_PATH`].
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

impl UploadConfig {
    pub const PUBLIC_PATH: &'static str = "/uploads";

    pub fn from_env() -> Self {
        let dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Self { dir }
    }
}
