use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::decode::decode_file;
use crate::encode::encode_ico;
use crate::error::IconError;
use crate::resize::resize_all;
use crate::sizes::{size_label, IconSize, SizeSet};

/// How the finished container reaches the destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write straight to the destination. A failure mid-write can leave a
    /// partial file behind.
    #[default]
    Direct,
    /// Write a sibling temporary file, then rename it over the destination.
    Atomic,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub destination: PathBuf,
    /// Sizes written, in container order.
    pub sizes: Vec<IconSize>,
    pub bytes_written: usize,
}

impl BuildReport {
    /// e.g. `"16x16, 32x32, 48x48, 64x64, 128x128, 256x256"`.
    pub fn sizes_label(&self) -> String {
        size_label(&self.sizes)
    }
}

/// Converts one source image into a multi-size ICO file.
#[derive(Debug, Clone, Default)]
pub struct IconBuilder {
    sizes: SizeSet,
    write_mode: WriteMode,
}

impl IconBuilder {
    pub fn new(sizes: SizeSet) -> Self {
        Self {
            sizes,
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn sizes(&self) -> &SizeSet {
        &self.sizes
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Decode `source`, resize to every configured size, encode, and write
    /// the container to `destination`.
    ///
    /// The destination's parent directory must already exist.
    pub fn build(&self, source: &Path, destination: &Path) -> crate::Result<BuildReport> {
        let start = Instant::now();

        let image = decode_file(source)?;
        let variants = resize_all(&image, &self.sizes);
        let bytes = encode_ico(&variants)?;

        match self.write_mode {
            WriteMode::Direct => write_direct(destination, &bytes)?,
            WriteMode::Atomic => write_atomic(destination, &bytes)?,
        }

        info!(
            "Wrote {} ({} bytes, {} sizes) in {:.1?}",
            destination.display(),
            bytes.len(),
            self.sizes.len(),
            start.elapsed()
        );

        Ok(BuildReport {
            destination: destination.to_path_buf(),
            sizes: self.sizes.as_slice().to_vec(),
            bytes_written: bytes.len(),
        })
    }
}

fn write_direct(destination: &Path, bytes: &[u8]) -> crate::Result<()> {
    std::fs::write(destination, bytes).map_err(|source| IconError::WriteDestination {
        path: destination.to_path_buf(),
        source,
    })
}

fn write_atomic(destination: &Path, bytes: &[u8]) -> crate::Result<()> {
    let temp = temp_path_for(destination);
    debug!("Staging container at {}", temp.display());

    if let Err(source) = std::fs::write(&temp, bytes) {
        discard(&temp);
        return Err(IconError::WriteDestination { path: temp, source });
    }
    if let Err(source) = std::fs::rename(&temp, destination) {
        discard(&temp);
        return Err(IconError::WriteDestination {
            path: destination.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Hidden sibling of `destination`, so the final rename stays on one filesystem.
fn temp_path_for(destination: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(destination.file_name().unwrap_or(OsStr::new("icon.ico")));
    name.push(format!(".{}.tmp", std::process::id()));
    destination.with_file_name(name)
}

fn discard(temp: &Path) {
    if let Err(e) = std::fs::remove_file(temp) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove temporary file {}: {e}", temp.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("assets/icon.ico"));
        assert_eq!(temp.parent(), Some(Path::new("assets")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".icon.ico."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn default_builder_uses_standard_sizes_and_direct_writes() {
        let builder = IconBuilder::default();
        assert_eq!(builder.sizes(), &SizeSet::standard());
        assert_eq!(builder.write_mode(), WriteMode::Direct);
    }

    #[test]
    fn report_label_lists_sizes_in_order() {
        let report = BuildReport {
            destination: PathBuf::from("icon.ico"),
            sizes: SizeSet::new(vec![16, 32]).unwrap().as_slice().to_vec(),
            bytes_written: 0,
        };
        assert_eq!(report.sizes_label(), "16x16, 32x32");
    }
}
