//! Slot type registry.
//!
//! Maps small integer codes to the canonical AMAZON slot types so the operator can pick a
//! common type by number instead of typing it out. The built-in table can be extended
//! (or individual codes replaced) through `[[slot_types]]` entries in the config file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

// ============================================================================
// Built-in Types
// ============================================================================

/// Built-in slot types as `(code, canonical type, description)`
pub const BUILTIN_SLOT_TYPES: &[(u32, &str, &str)] = &[
  (
    1,
    "AMAZON.LITERAL",
    "passes the words for the slot value with no conversion",
  ),
  (
    2,
    "AMAZON.NUMBER",
    "converts numeric words (five) into digits (such as 5)",
  ),
  (
    3,
    "AMAZON.DATE",
    "converts words that indicate dates (today, tomorrow, or july) into a date format (such as 2015-07-00T9)",
  ),
  (
    4,
    "AMAZON.TIME",
    "converts words that indicate time (four in the morning, two p m) into a time value (16:00).",
  ),
  (
    5,
    "AMAZON.DURATION",
    "converts words that indicate durations (five minutes) into a numeric duration (5M).",
  ),
  (
    6,
    "AMAZON.US_CITY",
    "Improves slot performance on all major US cities",
  ),
];

/// One slot type suggestion offered at the slot type prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTypeEntry {
  pub code: u32,
  pub canonical_type: String,
  pub description: String,
}

impl SlotTypeEntry {
  pub fn new(code: u32, canonical_type: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      code,
      canonical_type: canonical_type.into(),
      description: description.into(),
    }
  }
}

// ============================================================================
// Lookup
// ============================================================================

/// Read-only view of a slot type table
pub trait SlotTypes {
  /// Look up `(canonical type, description)` for a code
  fn describe(&self, code: u32) -> Result<(&str, &str)>;

  /// Human-readable listing of every entry in code order
  fn render_all(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
  entries: BTreeMap<u32, SlotTypeEntry>,
}

impl Registry {
  /// The built-in AMAZON types only
  pub fn builtin() -> Self {
    let entries = BUILTIN_SLOT_TYPES
      .iter()
      .map(|&(code, canonical, description)| (code, SlotTypeEntry::new(code, canonical, description)))
      .collect();
    Self { entries }
  }

  /// Built-in types plus extra entries; an extra entry replaces a built-in with the same code
  pub fn with_extensions(extra: impl IntoIterator<Item = SlotTypeEntry>) -> Self {
    let mut registry = Self::builtin();
    for entry in extra {
      if registry.entries.contains_key(&entry.code) {
        tracing::debug!(code = entry.code, canonical = %entry.canonical_type, "Overriding built-in slot type");
      }
      registry.entries.insert(entry.code, entry);
    }
    registry
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for Registry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl SlotTypes for Registry {
  fn describe(&self, code: u32) -> Result<(&str, &str)> {
    self
      .entries
      .get(&code)
      .map(|e| (e.canonical_type.as_str(), e.description.as_str()))
      .ok_or(Error::NotFound { code })
  }

  fn render_all(&self) -> String {
    let mut out = String::new();
    for entry in self.entries.values() {
      let _ = writeln!(out, "  {}: {}", entry.code, entry.canonical_type);
      let _ = writeln!(out, "     Description: {}", entry.description);
    }
    out
  }
}

// ============================================================================
// Selector Resolution
// ============================================================================

/// What the operator meant at the slot type prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTypeSelector {
  /// A registered code, already resolved to its canonical type
  Selected { code: u32, canonical_type: String },
  /// Anything else, taken verbatim as a custom slot type
  Custom(String),
}

impl SlotTypeSelector {
  /// Classify raw prompt text. Unknown codes fall back to a custom type.
  pub fn parse(raw: &str, registry: &dyn SlotTypes) -> Self {
    let raw = raw.trim();
    let Ok(code) = raw.parse::<u32>() else {
      return SlotTypeSelector::Custom(raw.to_string());
    };

    match registry.describe(code) {
      Ok((canonical, _)) => SlotTypeSelector::Selected {
        code,
        canonical_type: canonical.to_string(),
      },
      Err(_) => {
        tracing::debug!(code, "Unregistered slot type code, using it as a custom type");
        SlotTypeSelector::Custom(raw.to_string())
      }
    }
  }

  /// The slot type string to store in the schema
  pub fn into_type_name(self) -> String {
    match self {
      SlotTypeSelector::Selected { canonical_type, .. } => canonical_type,
      SlotTypeSelector::Custom(name) => name,
    }
  }
}
