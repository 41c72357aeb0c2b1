//! Diagnostics - masked, read-only view of a game for the debug surface
//!
//! Exposes offsets, lengths, the seed and the phase. Clue words never
//! leave through here.
//!
//! The browser object `window.__clues` holds only the snapshot from
//! [`Diagnostics::to_json`]. Lookups it cannot answer from that snapshot
//! (a hint index past the end, a decode) come back as a [`Request`] and
//! are answered by [`Diagnostics::handle`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ClueError, DecodeError};
use crate::generate::{MaskedPlacement, Puzzle};
use super::machine::Phase;

#[derive(Debug, Clone, Copy)]
pub struct Diagnostics<'a> {
    puzzle: &'a Puzzle,
    phase: Phase,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    seed: &'a str,
    hash: u32,
    phase: String,
    clue_count: usize,
    mapping: Vec<MaskedPlacement>,
}

/// A lookup forwarded from `window.__clues`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// `hint(i)` missed the snapshot; `index` is whatever the caller passed
    Hint {
        #[serde(default)]
        index: Value,
    },
    Decode { id: u64, hex: String, key: String },
}

/// Answer to a forwarded `decode`; `text` is `null` when decoding failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReply {
    pub id: u64,
    pub text: Option<String>,
}

impl<'a> Diagnostics<'a> {
    pub(super) fn new(puzzle: &'a Puzzle, phase: Phase) -> Self {
        Self { puzzle, phase }
    }

    pub fn seed(&self) -> &'a str {
        self.puzzle.seed()
    }

    pub fn hash(&self) -> u32 {
        self.puzzle.hash()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every clue's hint, in clue order
    pub fn mapping(&self) -> Vec<MaskedPlacement> {
        (0..self.puzzle.placements().len())
            .filter_map(|i| self.hint(i).ok())
            .collect()
    }

    /// Masked placement for a 0-based clue index
    pub fn hint(&self, index: usize) -> Result<MaskedPlacement, ClueError> {
        let placements = self.puzzle.placements();
        placements
            .get(index)
            .map(|p| p.masked(index))
            .ok_or_else(|| {
                warn!(index, count = placements.len(), "diagnostic hint out of range");
                ClueError::IndexOutOfRange {
                    index,
                    count: placements.len(),
                }
            })
    }

    /// JSON snapshot published to `window.__clues`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Snapshot {
            seed: self.seed(),
            hash: self.hash(),
            phase: self.phase().to_string(),
            clue_count: self.puzzle.clues().len(),
            mapping: self.mapping(),
        })
    }

    /// Answer a lookup the published snapshot could not.
    /// Only `decode` produces a reply; a missed hint is logged.
    pub fn handle(&self, request: Request) -> Option<DecodeReply> {
        match request {
            Request::Hint { index } => {
                match index.as_u64() {
                    // `hint` logs the miss
                    Some(i) => {
                        let _ = self.hint(usize::try_from(i).unwrap_or(usize::MAX));
                    }
                    None => warn!(%index, "diagnostic hint index is not a number"),
                }
                None
            }
            Request::Decode { id, hex, key } => {
                let text = decode(&hex, &key)
                    .map_err(|err| warn!(%err, "diagnostic decode failed"))
                    .ok();
                Some(DecodeReply { id, text })
            }
        }
    }
}

/// Hex-decode `input` and XOR it with the repeating bytes of `key`.
/// An empty key leaves the bytes as they are.
pub fn decode(input: &str, key: &str) -> Result<String, DecodeError> {
    let mut bytes = hex::decode(input.trim())?;
    let key = key.as_bytes();
    if !key.is_empty() {
        for (byte, k) in bytes.iter_mut().zip(key.iter().cycle()) {
            *byte ^= k;
        }
    }
    String::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8)
}
