//! Map argument-parser tool info dumps onto completion specs.
//!
//! An argument parser describes its CLI as a versioned JSON "tool info"
//! document. Every document starts with a header naming its
//! `serializationVersion`; the rest of the layout depends on that version.
//!
//! # Supported Versions
//!
//! - `0` - see [`v0`]
//!
//! # Example
//!
//! ```ignore
//! let dump = std::fs::read("mycli.json")?;
//! let spec = figspec_toolinfo::parse(&dump)?;
//! println!("{}", spec.script()?);
//! ```

pub mod v0;

use figspec_schema::{ScriptError, ScriptGenerator, Spec};
use serde::Deserialize;
use thiserror::Error;

/// Error type for tool info conversion.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported tool info serialization version: {0}")]
    UnsupportedVersion(i64),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// The part of a dump shared by every version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfoHeader {
    pub serialization_version: i64,
}

/// Decode a dump of any supported version into a [`Spec`].
pub fn parse(data: &[u8]) -> Result<Spec, Error> {
    let header: ToolInfoHeader = serde_json::from_slice(data)?;
    match header.serialization_version {
        0 => {
            let info: v0::ToolInfoV0 = serde_json::from_slice(data)?;
            Ok(info.into())
        }
        version => Err(Error::UnsupportedVersion(version)),
    }
}

/// Decode a dump and render it as a completion script.
pub fn generate_script(data: &[u8]) -> Result<String, Error> {
    generate_script_with(data, &ScriptGenerator::default())
}

/// Like [`generate_script`], with a caller-provided generator.
pub fn generate_script_with(data: &[u8], generator: &ScriptGenerator) -> Result<String, Error> {
    let spec = parse(data)?;
    Ok(generator.generate(&spec)?)
}
