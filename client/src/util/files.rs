//! Picked and dropped files: metadata extraction and object URLs.
//!
//! The wall validates [`FileMeta`] before asking for a URL, so an object URL
//! is only ever created for a file that will actually be shown.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use wall::FileMeta;

/// Files awaiting placement, matched back to their handles by name and size.
#[derive(Debug)]
pub struct Pending<T> {
    entries: Vec<(FileMeta, Option<T>)>,
}

impl<T> Pending<T> {
    #[must_use]
    pub fn new(entries: Vec<(FileMeta, T)>) -> Self {
        Self { entries: entries.into_iter().map(|(meta, handle)| (meta, Some(handle))).collect() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metadata for every file, in pick order.
    #[must_use]
    pub fn metas(&self) -> Vec<FileMeta> {
        self.entries.iter().map(|(meta, _)| meta.clone()).collect()
    }

    /// Take the first unclaimed handle whose metadata equals `meta`.
    pub fn take(&mut self, meta: &FileMeta) -> Option<T> {
        self.entries.iter_mut().find(|(m, h)| h.is_some() && m == meta).and_then(|(_, h)| h.take())
    }
}

/// Files from a drop or the file picker.
#[cfg(feature = "csr")]
pub type PickedFiles = Pending<web_sys::File>;

#[cfg(feature = "csr")]
impl Pending<web_sys::File> {
    pub fn from_list(list: Option<web_sys::FileList>) -> Self {
        let Some(list) = list else {
            return Self::new(Vec::new());
        };
        let entries = (0..list.length()).filter_map(|i| list.get(i)).map(|file| (meta_of(&file), file)).collect();
        Self::new(entries)
    }

    /// Create an object URL for the file matching `meta`.
    pub fn object_url(&mut self, meta: &FileMeta) -> Option<String> {
        let file = self.take(meta)?;
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("could not create object URL for {}: {e:?}", meta.name);
                None
            }
        }
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn meta_of(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size().max(0.0) as u64)
}

/// Release an object URL once its cell no longer shows it.
pub fn revoke(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("could not revoke {url}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("revoke {url}");
    }
}

/// Revoke every URL in `urls`.
pub fn revoke_all<'a>(urls: impl IntoIterator<Item = &'a str>) {
    for url in urls {
        revoke(url);
    }
}
