//! Output destination for encoded profiles.

use lutdiff_core::{ProfileCodec, ProfileResult};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where an encoded document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output.
    Stdout,
    /// A file, created or truncated on write.
    File(PathBuf),
}

impl Sink {
    /// Stdout unless an output path was given.
    pub fn from_output(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Sink::File(p.to_path_buf()),
            None => Sink::Stdout,
        }
    }

    /// Encodes `profile` and writes it followed by a newline.
    pub fn write_profile<P: ProfileCodec>(&self, profile: &P) -> ProfileResult<()> {
        match self {
            Sink::Stdout => {
                let text = profile.encode()?;
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.write_all(b"\n")?;
                out.flush()?;
                Ok(())
            }
            Sink::File(path) => lutdiff_core::write_profile(path, profile),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("stdout"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}
