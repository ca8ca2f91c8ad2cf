use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The game a record was originally caught, hatched or received in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum OriginGame {
    // Generation 3
    Sapphire,
    Ruby,
    Emerald,
    FireRed,
    LeafGreen,
    ColosseumXd,
    // Generation 4
    HeartGold,
    SoulSilver,
    Diamond,
    Pearl,
    Platinum,
    // Generation 5
    White,
    Black,
    White2,
    Black2,
    // Generation 6
    X,
    Y,
    AlphaSapphire,
    OmegaRuby,
    #[default]
    Unknown,
}

impl OriginGame {
    /// The version id stored in the record's origin field.
    pub fn version_id(self) -> u8 {
        use OriginGame::*;

        match self {
            Sapphire => 1,
            Ruby => 2,
            Emerald => 3,
            FireRed => 4,
            LeafGreen => 5,
            HeartGold => 7,
            SoulSilver => 8,
            Diamond => 10,
            Pearl => 11,
            Platinum => 12,
            ColosseumXd => 15,
            White => 20,
            Black => 21,
            White2 => 22,
            Black2 => 23,
            X => 24,
            Y => 25,
            AlphaSapphire => 26,
            OmegaRuby => 27,
            Unknown => 0,
        }
    }

    /// Maps a raw version id back to a game. Unrecognized ids become `Unknown`.
    pub fn from_version_id(id: u8) -> Self {
        use OriginGame::*;

        match id {
            1 => Sapphire,
            2 => Ruby,
            3 => Emerald,
            4 => FireRed,
            5 => LeafGreen,
            7 => HeartGold,
            8 => SoulSilver,
            10 => Diamond,
            11 => Pearl,
            12 => Platinum,
            15 => ColosseumXd,
            20 => White,
            21 => Black,
            22 => White2,
            23 => Black2,
            24 => X,
            25 => Y,
            26 => AlphaSapphire,
            27 => OmegaRuby,
            _ => Unknown,
        }
    }

    /// Generation the game belongs to, or `None` for an unrecognized origin.
    pub fn generation(self) -> Option<u8> {
        use OriginGame::*;

        match self {
            Sapphire | Ruby | Emerald | FireRed | LeafGreen | ColosseumXd => Some(3),
            HeartGold | SoulSilver | Diamond | Pearl | Platinum => Some(4),
            White | Black | White2 | Black2 => Some(5),
            X | Y | AlphaSapphire | OmegaRuby => Some(6),
            Unknown => None,
        }
    }
}
