//! State processing header blocks.

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::{FromBytes, Immutable};

use super::{
    block::Block,
    content::Content,
    number::{self, Base, NumberError},
};

/// Marker identifying the ustar header format, with its terminator.
const MAGIC: &[u8; 6] = b"ustar\0";
/// Revision of the ustar format understood by the decoder.
const VERSION: &[u8; 2] = b"00";

/// The fixed layout of a ustar header block.
///
/// Numeric fields hold nul-terminated runs of ASCII octal digits. The
/// checksum field is carried but never verified.
#[derive(FromBytes, Immutable)]
#[repr(C)]
pub struct HeaderRecord {
    pub name: [u8; 100],
    pub mode: [u8; 8],
    pub uid: [u8; 8],
    pub gid: [u8; 8],
    pub size: [u8; 12],
    pub mtime: [u8; 12],
    pub checksum: [u8; 8],
    pub typeflag: u8,
    pub link_name: [u8; 100],
    pub magic: [u8; 6],
    pub version: [u8; 2],
    pub user: [u8; 32],
    pub group: [u8; 32],
    pub dev_major: [u8; 8],
    pub dev_minor: [u8; 8],
    pub prefix: [u8; 155],
    pub pad: [u8; 12],
}

impl HeaderRecord {
    /// Reinterpret a block as a header record.
    pub fn of(r: &Block) -> &Self {
        zerocopy::transmute_ref!(r.bytes())
    }
}

/// Metadata announcing a file in the archive.
#[derive(Clone, Copy, Debug)]
pub struct FileMeta {
    name: [u8; 100],
    size: usize,
}

impl FileMeta {
    /// The name of the file, up to its terminator.
    ///
    /// Names are raw bytes; they are not required to be UTF-8.
    pub fn name(&self) -> &[u8] {
        let end = self.name.iter().position(|r| *r == 0).unwrap_or(self.name.len());
        &self.name[..end]
    }

    /// The length of the file's content, in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// An error advancing over a file header.
#[derive(Debug, Error)]
pub enum FileHeaderError {
    /// Name field missing a terminator.
    #[error("Unterminated name field.")]
    UnterminatedName,
    /// Size field missing a terminator.
    #[error("Unterminated size field.")]
    UnterminatedSize,
    /// Size field could not be decoded.
    #[error("Unreadable size field: {0}")]
    Size(#[from] NumberError),
}

/// State token to decode a file header.
#[derive(Debug)]
pub struct FileHeader;

impl FileHeader {
    /// Transition to another state by decoding a header block.
    ///
    /// A block without the ustar magic and version markers is not a header:
    /// the token is returned unchanged and no error is raised, letting
    /// filler between archive members pass through.
    ///
    /// For a recognized header, returns the file's metadata and a successor
    /// token: the content state for a file with content, or this state again
    /// for an empty file, whose next block is the following file's header.
    pub fn advance(
        self,
        r: &Block,
    ) -> Result<Either<(FileMeta, Either<Content, FileHeader>), FileHeader>, FileHeaderError> {
        let record = HeaderRecord::of(r);

        if &record.magic != MAGIC || &record.version != VERSION {
            return Ok(Right(FileHeader));
        }

        if !record.name.contains(&0) {
            Err(FileHeaderError::UnterminatedName)?;
        }

        let size = terminated(&record.size).ok_or(FileHeaderError::UnterminatedSize)?;
        let size = number::decode_unsigned(size, Base::Octal)?;

        let meta = FileMeta {
            name: record.name,
            size,
        };

        let successor = if size != 0 {
            Left(Content { remaining: size })
        } else {
            Right(FileHeader)
        };

        Ok(Left((meta, successor)))
    }
}

/// The run of a field before its terminator, if one is present.
fn terminated(r: &[u8]) -> Option<&[u8]> {
    r.iter().position(|r| *r == 0).map(|end| &r[..end])
}
