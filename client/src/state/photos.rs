//! Ordered selection of photos picked on the registration page.
//!
//! Generic over the file handle so the bookkeeping can be tested without a
//! browser; the page instantiates it with `util::files::BrowserFile`.

#[cfg(test)]
#[path = "photos_test.rs"]
mod photos_test;

use forms::is_accepted_image;

/// A picked file that passed the image-type check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoEntry<F> {
    pub id: u64,
    pub name: String,
    pub file: F,
}

/// Reason a picked file was not added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRejected {
    pub name: String,
    pub mime: String,
}

#[derive(Clone, Debug)]
pub struct PhotoSelection<F> {
    next_id: u64,
    entries: Vec<PhotoEntry<F>>,
}

impl<F> Default for PhotoSelection<F> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<F> PhotoSelection<F> {
    /// Append a picked file if `mime` is an accepted image type.
    ///
    /// `make` is only called for accepted files, so callers can defer
    /// expensive handle creation (object URLs) until the type is known.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoRejected`] when the MIME type is not an accepted image.
    pub fn offer(&mut self, name: &str, mime: &str, make: impl FnOnce() -> F) -> Result<u64, PhotoRejected> {
        if !is_accepted_image(mime) {
            return Err(PhotoRejected { name: name.to_owned(), mime: mime.to_owned() });
        }
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(PhotoEntry { id, name: name.to_owned(), file: make() });
        Ok(id)
    }

    /// Remove one entry by id, handing it back so the caller can release it.
    pub fn remove(&mut self, id: u64) -> Option<PhotoEntry<F>> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Empty the selection, returning every entry for release.
    pub fn take_all(&mut self) -> Vec<PhotoEntry<F>> {
        std::mem::take(&mut self.entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[PhotoEntry<F>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
