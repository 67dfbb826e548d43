use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    LearnMethod,
    vocabulary,
};

/// A move a species can learn, under the conditions of one acquisition method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnableMove {
    /// ID of the move.
    pub id: u32,
    /// Name of the move.
    pub name: String,
    /// Minimum level at which the move is learned.
    ///
    /// Zero for methods that do not depend on level.
    #[serde(default)]
    pub min_level: u8,
    /// Game version the entry applies to.
    pub version: String,
}

/// Raw learnable moves, keyed by learn method token.
pub type SerializedLearnableMoves = IndexMap<String, Vec<LearnableMove>>;

/// All moves a species can learn, partitioned by acquisition method.
///
/// Tutor moves are not offered and are dropped when the partition is built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LearnableMoves {
    pub level_up: Vec<LearnableMove>,
    /// Moves taught by TMs and TRs.
    pub machine: Vec<LearnableMove>,
    pub egg: Vec<LearnableMove>,
}

impl LearnableMoves {
    /// Partitions raw learnable moves by method.
    pub fn from_methods(methods: SerializedLearnableMoves) -> Self {
        let mut learnable_moves = Self::default();
        for (method, moves) in methods {
            match vocabulary::learn_method(&method) {
                LearnMethod::LevelUp => learnable_moves.level_up.extend(moves),
                LearnMethod::Machine => learnable_moves.machine.extend(moves),
                LearnMethod::Egg => learnable_moves.egg.extend(moves),
                LearnMethod::Tutor | LearnMethod::FormChange => (),
            }
        }
        learnable_moves
    }

    /// Moves learned by the given method.
    ///
    /// Empty for methods that are not partitioned.
    pub fn by_method(&self, method: LearnMethod) -> &[LearnableMove] {
        match method {
            LearnMethod::LevelUp => &self.level_up,
            LearnMethod::Machine => &self.machine,
            LearnMethod::Egg => &self.egg,
            LearnMethod::Tutor | LearnMethod::FormChange => &[],
        }
    }

    /// Iterates over every learnable move, level-up first, then machine, then egg.
    pub fn iter(&self) -> impl Iterator<Item = &LearnableMove> {
        self.level_up
            .iter()
            .chain(self.machine.iter())
            .chain(self.egg.iter())
    }

    pub fn len(&self) -> usize {
        self.level_up.len() + self.machine.len() + self.egg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
