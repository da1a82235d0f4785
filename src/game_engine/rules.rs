//! Static placement rules.
//!
//! The recycle game only ever produces `Correct` or `WrongBin`. The reuse game
//! produces `Correct` or `Incompatible`; a reusable item in the trash and a
//! non-reusable item at a reuse station are both incompatible actions, not
//! plain misses. Pairing a category item with a reuse zone (or the reverse)
//! cannot happen with the built-in layouts and is treated as incompatible.

use serde::{Deserialize, Serialize};

use crate::game_engine::models::{Classification, Item, Zone, ZoneRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    WrongBin,
    Incompatible,
}

/// Judge `item` released over `zone`.
pub fn judge(item: &Item, zone: &Zone) -> Verdict {
    match (item.class, zone.role) {
        (Classification::Category(have), ZoneRole::Bin(want)) => {
            if have == want { Verdict::Correct } else { Verdict::WrongBin }
        }
        (Classification::Reusable(false), ZoneRole::Disposal) => Verdict::Correct,
        (Classification::Reusable(true), ZoneRole::ReuseCapable) => Verdict::Correct,
        _ => Verdict::Incompatible,
    }
}

pub fn is_correct_placement(item: &Item, zone: &Zone) -> bool {
    judge(item, zone) == Verdict::Correct
}
