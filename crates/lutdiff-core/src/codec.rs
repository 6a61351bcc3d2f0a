//! Document encoding shared by both profile formats.

use crate::ProfileResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Text encoding of a profile document.
///
/// Implemented once per format: the flat JSON [`Profile`](crate::Profile)
/// and the dcpTool XML [`DcpData`](crate::DcpData).
pub trait ProfileCodec: Sized {
    /// Short format name used in log output.
    const FORMAT: &'static str;

    /// Decodes a whole document.
    ///
    /// An empty document (or JSON `null`) is reported as
    /// [`ProfileError::MissingInput`](crate::ProfileError::MissingInput).
    fn decode(text: &str) -> ProfileResult<Self>;

    /// Encodes the document with two-space indentation.
    fn encode(&self) -> ProfileResult<String>;
}

/// Reads and decodes a profile document from disk.
///
/// # Example
///
/// ```rust,no_run
/// use lutdiff_core::{Profile, read_profile};
///
/// let profile: Profile = read_profile("start.json").unwrap();
/// println!("{}", profile.profile_name);
/// ```
pub fn read_profile<P: ProfileCodec>(path: impl AsRef<Path>) -> ProfileResult<P> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), format = P::FORMAT, bytes = text.len(), "read profile");
    P::decode(&text)
}

/// Encodes a profile and writes it to disk, followed by a newline.
pub fn write_profile<P: ProfileCodec>(path: impl AsRef<Path>, profile: &P) -> ProfileResult<()> {
    let path = path.as_ref();
    let mut text = profile.encode()?;
    text.push('\n');
    fs::write(path, text.as_bytes())?;
    debug!(path = %path.display(), format = P::FORMAT, bytes = text.len(), "wrote profile");
    Ok(())
}
