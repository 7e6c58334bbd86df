//! Game configuration.
//!
//! - `DealLayout`: how many cards each tableau receives face-down and face-up
//! - `GameConfig`: the layout plus an optional fixed deal seed
//!
//! The standard Yukon layout is the default. Builders exist so tests and
//! front ends can describe a layout explicitly, but `validate` only accepts
//! layouts that deal the whole deck onto the seven tableaus.

use serde::{Deserialize, Serialize};

use super::card::DECK_SIZE;
use super::error::ConfigError;

/// Number of tableau piles on a Yukon board.
pub const NUM_TABLEAUS: usize = 7;

/// Per-tableau deal counts.
///
/// Tableau `i` receives `face_down[i]` hidden cards followed by
/// `face_up[i]` visible ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealLayout {
    pub face_down: [usize; NUM_TABLEAUS],
    pub face_up: [usize; NUM_TABLEAUS],
}

impl DealLayout {
    /// Standard Yukon: `i` face-down cards on tableau `i`, then one face-up
    /// card on tableau 0 and five on every other tableau.
    #[must_use]
    pub fn yukon() -> Self {
        let mut face_down = [0; NUM_TABLEAUS];
        let mut face_up = [5; NUM_TABLEAUS];
        for (i, hidden) in face_down.iter_mut().enumerate() {
            *hidden = i;
        }
        face_up[0] = 1;
        Self { face_down, face_up }
    }

    /// Override the counts for one tableau. Out-of-range indices are
    /// ignored.
    #[must_use]
    pub fn with_tableau(mut self, index: usize, face_down: usize, face_up: usize) -> Self {
        if let (Some(down), Some(up)) = (self.face_down.get_mut(index), self.face_up.get_mut(index)) {
            *down = face_down;
            *up = face_up;
        }
        self
    }

    /// Cards dealt to tableau `index`, 0 for an out-of-range index.
    #[must_use]
    pub fn pile_size(&self, index: usize) -> usize {
        match (self.face_down.get(index), self.face_up.get(index)) {
            (Some(down), Some(up)) => down + up,
            _ => 0,
        }
    }

    /// Cards dealt across all tableaus.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        (0..NUM_TABLEAUS).map(|i| self.pile_size(i)).sum()
    }

    /// Check that this layout deals exactly one deck and leaves every
    /// tableau with a playable top card.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(ConfigError::CardCount {
                expected: DECK_SIZE,
                actual: total,
            });
        }
        if let Some(index) = (0..NUM_TABLEAUS).find(|&i| self.face_up[i] == 0) {
            return Err(ConfigError::NoFaceUpCard(index));
        }
        Ok(())
    }
}

impl Default for DealLayout {
    fn default() -> Self {
        Self::yukon()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deal layout.
    #[serde(default)]
    pub layout: DealLayout,

    /// Fixed shuffle seed. `None` draws a seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create the standard configuration with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the deal layout.
    #[must_use]
    pub fn with_layout(mut self, layout: DealLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()
    }
}
