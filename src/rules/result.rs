//! Plate-appearance result codes.
//!
//! `ResultCode` is a closed enumeration. Every code maps to exactly one
//! `MovementClass`, which is all the resolution engine needs to propose
//! runner movement; exhaustive matches keep the mapping compile-checked.
//!
//! Codes serialize as the short scorebook abbreviations ("1B", "GIDP", ...).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::movement::Destination;

/// Result of a plate appearance (or a between-pitch event).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    #[serde(rename = "1B")]
    Single,
    #[serde(rename = "2B")]
    Double,
    #[serde(rename = "3B")]
    Triple,
    #[serde(rename = "HR")]
    HomeRun,
    #[serde(rename = "BB")]
    Walk,
    #[serde(rename = "IBB")]
    IntentionalWalk,
    #[serde(rename = "HBP")]
    HitByPitch,
    #[serde(rename = "SO")]
    Strikeout,
    #[serde(rename = "GO")]
    GroundOut,
    #[serde(rename = "FO")]
    FlyOut,
    #[serde(rename = "SAC")]
    Sacrifice,
    #[serde(rename = "SF")]
    SacrificeFly,
    #[serde(rename = "ROE")]
    ReachedOnError,
    #[serde(rename = "FC")]
    FieldersChoice,
    #[serde(rename = "GIDP")]
    GroundedIntoDoublePlay,
    /// Interference, also used as the marker code on steal records.
    #[serde(rename = "XI")]
    InterferenceOrStolenBaseMarker,
    #[serde(rename = "WP")]
    WildPitch,
    #[serde(rename = "BK")]
    Balk,
}

/// How a result code moves the runners already on base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementClass {
    /// Every runner advances this many bases (advisory; 4 clears the bases).
    Advance(u8),
    /// A runner advances one base only if every base below is occupied.
    Forced,
    /// Only a runner on Third is proposed to score.
    SacrificeFly,
    /// Lead runners retired, runner on Third scores (see `DoublePlayPolicy`).
    DoublePlay,
    /// No movement: runners hold.
    Static,
}

impl ResultCode {
    /// Every code, in scorebook order.
    pub const ALL: [ResultCode; 18] = [
        ResultCode::Single,
        ResultCode::Double,
        ResultCode::Triple,
        ResultCode::HomeRun,
        ResultCode::Walk,
        ResultCode::IntentionalWalk,
        ResultCode::HitByPitch,
        ResultCode::Strikeout,
        ResultCode::GroundOut,
        ResultCode::FlyOut,
        ResultCode::Sacrifice,
        ResultCode::SacrificeFly,
        ResultCode::ReachedOnError,
        ResultCode::FieldersChoice,
        ResultCode::GroundedIntoDoublePlay,
        ResultCode::InterferenceOrStolenBaseMarker,
        ResultCode::WildPitch,
        ResultCode::Balk,
    ];

    /// Scorebook abbreviation.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ResultCode::Single => "1B",
            ResultCode::Double => "2B",
            ResultCode::Triple => "3B",
            ResultCode::HomeRun => "HR",
            ResultCode::Walk => "BB",
            ResultCode::IntentionalWalk => "IBB",
            ResultCode::HitByPitch => "HBP",
            ResultCode::Strikeout => "SO",
            ResultCode::GroundOut => "GO",
            ResultCode::FlyOut => "FO",
            ResultCode::Sacrifice => "SAC",
            ResultCode::SacrificeFly => "SF",
            ResultCode::ReachedOnError => "ROE",
            ResultCode::FieldersChoice => "FC",
            ResultCode::GroundedIntoDoublePlay => "GIDP",
            ResultCode::InterferenceOrStolenBaseMarker => "XI",
            ResultCode::WildPitch => "WP",
            ResultCode::Balk => "BK",
        }
    }

    /// Movement rule for runners already on base.
    #[must_use]
    pub const fn movement_class(self) -> MovementClass {
        match self {
            ResultCode::Single
            | ResultCode::ReachedOnError
            | ResultCode::FieldersChoice
            | ResultCode::Sacrifice => MovementClass::Advance(1),
            ResultCode::Double => MovementClass::Advance(2),
            ResultCode::Triple => MovementClass::Advance(3),
            ResultCode::HomeRun => MovementClass::Advance(4),
            ResultCode::Walk | ResultCode::IntentionalWalk | ResultCode::HitByPitch => {
                MovementClass::Forced
            }
            ResultCode::SacrificeFly => MovementClass::SacrificeFly,
            ResultCode::GroundedIntoDoublePlay => MovementClass::DoublePlay,
            ResultCode::Strikeout
            | ResultCode::GroundOut
            | ResultCode::FlyOut
            | ResultCode::InterferenceOrStolenBaseMarker
            | ResultCode::WildPitch
            | ResultCode::Balk => MovementClass::Static,
        }
    }

    /// Where the batter ends up, or `None` when the batter takes no part in
    /// the runner list (simply out, or not a plate appearance at all).
    #[must_use]
    pub const fn batter_destination(self) -> Option<Destination> {
        match self {
            ResultCode::Single | ResultCode::ReachedOnError | ResultCode::FieldersChoice => {
                Some(Destination::First)
            }
            ResultCode::Double => Some(Destination::Second),
            ResultCode::Triple => Some(Destination::Third),
            ResultCode::HomeRun => Some(Destination::Home),
            ResultCode::Walk | ResultCode::IntentionalWalk | ResultCode::HitByPitch => {
                Some(Destination::First)
            }
            ResultCode::Sacrifice
            | ResultCode::SacrificeFly
            | ResultCode::GroundedIntoDoublePlay => Some(Destination::Out),
            ResultCode::Strikeout
            | ResultCode::GroundOut
            | ResultCode::FlyOut
            | ResultCode::InterferenceOrStolenBaseMarker
            | ResultCode::WildPitch
            | ResultCode::Balk => None,
        }
    }

    /// The batter is out without appearing in the runner list.
    #[must_use]
    pub const fn implicit_batter_out(self) -> bool {
        matches!(
            self,
            ResultCode::Strikeout | ResultCode::GroundOut | ResultCode::FlyOut
        )
    }

    /// Results whose proposal goes through a review session before commit.
    #[must_use]
    pub const fn opens_review(self) -> bool {
        matches!(
            self,
            ResultCode::Single
                | ResultCode::Double
                | ResultCode::Triple
                | ResultCode::HomeRun
                | ResultCode::ReachedOnError
                | ResultCode::FieldersChoice
                | ResultCode::SacrificeFly
                | ResultCode::Sacrifice
                | ResultCode::GroundedIntoDoublePlay
        )
    }

    /// Counted as an out on pitching-play records.
    #[must_use]
    pub const fn is_out(self) -> bool {
        matches!(
            self,
            ResultCode::Strikeout
                | ResultCode::GroundOut
                | ResultCode::FlyOut
                | ResultCode::Sacrifice
                | ResultCode::SacrificeFly
                | ResultCode::GroundedIntoDoublePlay
        )
    }

    /// Ends the batter's turn, moving the batting order on.
    #[must_use]
    pub const fn advances_batting_order(self) -> bool {
        !matches!(
            self,
            ResultCode::InterferenceOrStolenBaseMarker | ResultCode::WildPitch | ResultCode::Balk
        )
    }

    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(
            self,
            ResultCode::Single | ResultCode::Double | ResultCode::Triple | ResultCode::HomeRun
        )
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Parse failure for a result-code abbreviation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown result code: {0}")]
pub struct UnknownResultCode(pub String);

impl FromStr for ResultCode {
    type Err = UnknownResultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultCode::ALL
            .into_iter()
            .find(|code| code.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownResultCode(s.to_string()))
    }
}
