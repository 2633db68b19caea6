//! Production tag reader backed by lofty.

use std::borrow::Cow;
use std::path::Path;

use lofty::error::ErrorKind;
use lofty::prelude::{Accessor, TaggedFileExt};
use lofty::probe::Probe;

use super::{AudioTags, TagReadError, TagReader};

/// Reads tags with lofty, which covers both the ID3 and MP4 atom families
/// behind one accessor surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    fn read_tags(&self, path: &Path) -> Result<Option<AudioTags>, TagReadError> {
        let file = match Probe::open(path).and_then(Probe::read) {
            Ok(file) => file,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::UnknownFormat => Ok(None),
                    _ => Err(TagReadError::new(err.to_string())),
                };
            }
        };

        // Textual fields come from the primary tag container; pictures are
        // counted across every container, since artwork is often stored in a
        // secondary tag.
        let tag = file.primary_tag().or_else(|| file.first_tag());
        let picture_count = file.tags().iter().map(|t| t.pictures().len()).sum();

        let (album, artist, track_number) = match tag {
            Some(tag) => (
                tag.album().map(Cow::into_owned),
                tag.artist().map(Cow::into_owned),
                tag.track(),
            ),
            None => (None, None, None),
        };

        Ok(Some(AudioTags {
            album,
            artist,
            track_number,
            picture_count,
        }))
    }
}
