use crate::error::{BfResult, BootForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub const LAYER_SIZE: usize = 256;
pub const SHIFT_OFFSET: usize = 256;
pub const SPECIAL_OFFSET: usize = 512;
pub const TABLE_SIZE: usize = 768;

// Control codes the keyboard driver understands in the special layer.
pub const KEY_UP: u8 = 0x11;
pub const KEY_DOWN: u8 = 0x12;

/// A rule value is either a literal byte or a printable character.
///
/// Characters resolve to their Latin-1 byte (the low byte of the codepoint);
/// anything above U+00FF has no single-byte form and is a fatal rule error.
/// In JSON rule files this deserializes from either an integer or a
/// single-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Byte(u8),
    Char(char),
}

impl RuleValue {
    pub fn resolve(self) -> BfResult<u8> {
        match self {
            RuleValue::Byte(b) => Ok(b),
            RuleValue::Char(c) => {
                let cp = c as u32;
                if cp > 0xFF {
                    return Err(BootForgeError::Rule(format!(
                        "character '{}' (U+{:04X}) has no Latin-1 byte",
                        c, cp
                    )));
                }
                Ok(cp as u8)
            }
        }
    }
}

impl From<u8> for RuleValue {
    fn from(b: u8) -> Self {
        RuleValue::Byte(b)
    }
}

impl From<char> for RuleValue {
    fn from(c: char) -> Self {
        RuleValue::Char(c)
    }
}

/// One scancode mapping: normal layer, shift layer, optional special layer.
///
/// The scancode is a `u8`, so the 0-255 range is enforced by the type; a rule
/// file with a larger scancode fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub scancode: u8,
    pub normal: RuleValue,
    pub shift: RuleValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<RuleValue>,
}

impl Rule {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Vec<Rule>> {
        let content = fs::read_to_string(&path)?;
        let rules: Vec<Rule> = serde_json::from_str(&content)?;
        Ok(rules)
    }
}

/// The 768-byte scancode lookup table: three 256-cell layers (normal, shift,
/// special) in that order. The driver indexes it by `scancode + layer offset`,
/// so the byte layout is a hard compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapTable {
    cells: [u8; TABLE_SIZE],
}

impl Default for KeymapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeymapTable {
    /// A fresh table: every cell 0 (no mapping).
    pub fn new() -> Self {
        Self {
            cells: [0; TABLE_SIZE],
        }
    }

    /// Writes one scancode's cells. Values are resolved before any cell is
    /// touched, so a bad value leaves the table unchanged. Calling this twice
    /// for the same scancode silently overwrites (last write wins).
    ///
    /// The special layer is only written when an override is supplied; it is
    /// never mirrored from the normal layer.
    pub fn set_key(
        &mut self,
        scancode: u8,
        normal: RuleValue,
        shift: RuleValue,
        special: Option<RuleValue>,
    ) -> BfResult<()> {
        let normal = normal.resolve()?;
        let shift = shift.resolve()?;
        let special = special.map(RuleValue::resolve).transpose()?;

        let idx = scancode as usize;
        self.cells[idx] = normal;
        self.cells[idx + SHIFT_OFFSET] = shift;
        if let Some(sp) = special {
            self.cells[idx + SPECIAL_OFFSET] = sp;
        }
        Ok(())
    }

    pub fn apply(&mut self, rule: &Rule) -> BfResult<()> {
        self.set_key(rule.scancode, rule.normal, rule.shift, rule.special)
    }

    pub fn normal(&self, scancode: u8) -> u8 {
        self.cells[scancode as usize]
    }

    pub fn shift(&self, scancode: u8) -> u8 {
        self.cells[scancode as usize + SHIFT_OFFSET]
    }

    pub fn special(&self, scancode: u8) -> u8 {
        self.cells[scancode as usize + SPECIAL_OFFSET]
    }

    /// Raw cell-order bytes: normal[0..256), shift[0..256), special[0..256).
    /// No header, no checksum.
    pub fn as_bytes(&self) -> &[u8; TABLE_SIZE] {
        &self.cells
    }

    /// Writes the artifact atomically: temp file in the destination
    /// directory, then rename. An interrupted or failed run never leaves a
    /// truncated table behind.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> BfResult<()> {
        let path = path.as_ref();
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

        let mut tmp = match dir {
            Some(d) => tempfile::NamedTempFile::new_in(d),
            None => tempfile::NamedTempFile::new_in("."),
        }
        .map_err(|source| BootForgeError::ArtifactWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tmp.write_all(&self.cells)
            .and_then(|_| tmp.flush())
            .map_err(|source| BootForgeError::ArtifactWrite {
                path: path.to_path_buf(),
                source,
            })?;

        tmp.persist(path)
            .map_err(|e| BootForgeError::ArtifactWrite {
                path: path.to_path_buf(),
                source: e.error,
            })?;
        Ok(())
    }
}

/// Builds a table from scratch and applies every rule in slice order.
pub fn compile(rules: &[Rule]) -> BfResult<KeymapTable> {
    let mut table = KeymapTable::new();
    for rule in rules {
        table.apply(rule)?;
    }
    Ok(table)
}
