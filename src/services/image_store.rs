//! File-system storage for studio images. One image per studio, stored at
//! `{root}/images/studios/{studioId}{extension}` and served by the boundary
//! layer under `/images/studios/`.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Extensions accepted for studio images, in canonical lowercase form.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpeg", ".jpg", ".png", ".gif"];

/// Lowercased extension of a file name, including the leading dot.
/// Returns an empty string when the name has no extension.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => file_name[dot..].to_ascii_lowercase(),
        None => String::new(),
    }
}

pub fn is_allowed(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

/// URL path the boundary layer serves a stored image under.
pub fn public_image_path(studio_id: i32, extension: &str) -> String {
    format!("/images/studios/{}{}", studio_id, extension)
}

#[derive(Clone, Debug)]
pub struct StudioImageStore {
    root: PathBuf,
}

impl StudioImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn dir(&self) -> PathBuf {
        self.root.join("images").join("studios")
    }

    pub fn path_for(&self, studio_id: i32, extension: &str) -> PathBuf {
        self.dir().join(format!("{}{}", studio_id, extension))
    }

    pub fn write(&self, studio_id: i32, extension: &str, content: &[u8]) -> io::Result<()> {
        fs::create_dir_all(self.dir())?;
        fs::write(self.path_for(studio_id, extension), content)
    }

    /// Remove a stored image. Missing files are not an error.
    pub fn delete(&self, studio_id: i32, extension: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(studio_id, extension)) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    pub fn exists(&self, studio_id: i32, extension: &str) -> bool {
        self.path_for(studio_id, extension).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_and_keeps_the_dot() {
        assert_eq!(extension_of("logo.PNG"), ".png");
        assert_eq!(extension_of("archive.tar.GZ"), ".gz");
        assert_eq!(extension_of("noextension"), "");
    }

    #[test]
    fn only_the_allowed_set_passes() {
        assert!(is_allowed(".jpeg"));
        assert!(is_allowed(".jpg"));
        assert!(is_allowed(".png"));
        assert!(is_allowed(".gif"));
        assert!(!is_allowed(".bmp"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn public_path_joins_id_and_extension() {
        assert_eq!(public_image_path(5, ".gif"), "/images/studios/5.gif");
    }

    #[test]
    fn write_exists_delete_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let store = StudioImageStore::new(root.path());

        assert!(!store.exists(1, ".png"));
        store.write(1, ".png", b"image-bytes").unwrap();
        assert!(store.exists(1, ".png"));

        store.delete(1, ".png").unwrap();
        assert!(!store.exists(1, ".png"));
    }

    #[test]
    fn deleting_a_missing_file_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        let store = StudioImageStore::new(root.path());
        store.delete(9, ".jpg").unwrap();
    }
}
