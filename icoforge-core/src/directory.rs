//! Reader for the directory of an ICO file: one entry per stored frame.

use std::io::Cursor;
use std::path::Path;

use ico::{IconDir, IconDirEntry, ResourceType};
use tracing::debug;

use crate::error::IconError;

/// How a frame's pixel payload is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Png,
    Bmp,
}

/// One directory entry of an ICO file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Payload length in bytes.
    pub size: u32,
    pub kind: PayloadKind,
}

/// Parsed ICO directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDirectory {
    pub entries: Vec<IconEntry>,
}

impl IconDirectory {
    /// Read and parse the ICO file at `path`.
    pub fn read(path: &Path) -> crate::Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| IconError::ReadIco {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes)
    }

    pub fn parse(bytes: &[u8]) -> crate::Result<Self> {
        let dir =
            IconDir::read(Cursor::new(bytes)).map_err(|e| IconError::malformed(e.to_string()))?;
        if dir.resource_type() != ResourceType::Icon {
            return Err(IconError::malformed(format!(
                "resource type {:?} is not an icon",
                dir.resource_type()
            )));
        }

        let entries = dir
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| to_entry(entry, index))
            .collect::<crate::Result<Vec<_>>>()?;

        debug!("Parsed ICO directory with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// `(width, height)` of every entry, in directory order.
    pub fn sizes(&self) -> Vec<(u32, u32)> {
        self.entries.iter().map(|e| (e.width, e.height)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_entry(entry: &IconDirEntry, index: usize) -> crate::Result<IconEntry> {
    let (width, height) = (entry.width(), entry.height());
    let kind = if entry.is_png() {
        check_png_payload(entry.data(), width, height, index)?;
        PayloadKind::Png
    } else {
        PayloadKind::Bmp
    };

    Ok(IconEntry {
        width,
        height,
        bits_per_pixel: entry.bits_per_pixel(),
        size: entry.data().len() as u32,
        kind,
    })
}

/// The embedded PNG header must agree with the directory entry.
fn check_png_payload(payload: &[u8], width: u32, height: u32, index: usize) -> crate::Result<()> {
    let reader = png::Decoder::new(Cursor::new(payload))
        .read_info()
        .map_err(|e| IconError::malformed(format!("entry {index}: bad PNG payload: {e}")))?;
    let info = reader.info();
    if (info.width, info.height) != (width, height) {
        return Err(IconError::malformed(format!(
            "entry {index}: directory says {width}×{height}, PNG says {}×{}",
            info.width, info.height
        )));
    }
    Ok(())
}
