//! Intent schema document model and its on-disk form.
//!
//! The file is pretty-printed JSON with 2-space indentation:
//!
//! ```text
//! {
//!   "intents": [
//!     {
//!       "intent": "GetWeather",
//!       "slots": [
//!         { "name": "city", "type": "AMAZON.US_CITY" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Field order is fixed by the struct declarations (`intent` before `slots`, `name` before
//! `type`), so files written by older sessions re-serialize byte-for-byte.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// One named, typed parameter of an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slot {
  name: String,
  #[serde(rename = "type")]
  type_name: String,
}

impl Slot {
  pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      type_name: type_name.into(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn type_name(&self) -> &str {
    &self.type_name
  }
}

/// A named action with its ordered slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Intent {
  #[serde(rename = "intent")]
  name: String,
  /// Older hand-written schemas omit `slots` for parameterless intents
  #[serde(default)]
  slots: Vec<Slot>,
}

impl Intent {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn slots(&self) -> &[Slot] {
    &self.slots
  }
}

/// Where a document came from when it was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
  /// Parsed from an existing file
  Loaded,
  /// No file existed; started empty
  Created,
}

/// The root aggregate: every intent in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
  intents: Vec<Intent>,
}

impl Document {
  /// A fresh document with no intents
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse the canonical text form
  pub fn parse(text: &str) -> serde_json::Result<Self> {
    serde_json::from_str(text)
  }

  /// Load `path`, or start empty when the file doesn't exist
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    Self::load_or_create(path).map(|(document, _)| document)
  }

  /// Like [`Document::load`], also reporting whether the file existed
  pub fn load_or_create(path: impl AsRef<Path>) -> Result<(Self, Origin)> {
    let path = path.as_ref();
    if !path.exists() {
      info!(path = %path.display(), "Schema file does not exist, starting empty");
      return Ok((Self::new(), Origin::Created));
    }

    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let document = Self::parse(&content).map_err(|source| Error::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    info!(path = %path.display(), intents = document.intents.len(), "Loaded schema");
    Ok((document, Origin::Loaded))
  }

  pub fn intents(&self) -> &[Intent] {
    &self.intents
  }

  /// Append an intent. Duplicate names are allowed.
  pub fn add_intent(&mut self, name: impl Into<String>, slots: Vec<Slot>) {
    let intent = Intent {
      name: name.into(),
      slots,
    };
    tracing::debug!(intent = %intent.name, slots = intent.slots.len(), "Adding intent");
    self.intents.push(intent);
  }

  /// Build a slot for [`Document::add_intent`]; any pair of strings is accepted
  pub fn build_slot(name: impl Into<String>, type_name: impl Into<String>) -> Slot {
    Slot::new(name, type_name)
  }

  /// Canonical text form, 2-space indented
  pub fn render(&self) -> String {
    self.to_string()
  }

  /// Overwrite `path` with the rendered document
  pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut content = self.render();
    content.push('\n');

    std::fs::write(path, content).map_err(|source| Error::Persist {
      path: path.to_path_buf(),
      source,
    })?;

    info!(path = %path.display(), intents = self.intents.len(), "Saved schema");
    Ok(())
  }
}

impl fmt::Display for Document {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
    f.write_str(&text)
  }
}
