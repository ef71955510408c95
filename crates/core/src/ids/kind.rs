#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub const ID_TAG_LEN: usize = 3;
pub const ID_SUFFIX_LEN: usize = 32;
pub const ID_LEN: usize = ID_TAG_LEN + 1 + ID_SUFFIX_LEN;

/// Entity kind carried by the three-letter tag at the front of every id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    User,
    Bowl,
    Tmnt,
    Event,
    Div,
    Squad,
    Lane,
    Pot,
    Brkt,
    OneBrkt,
    BrktEntry,
    Elim,
    ElimEntry,
    Player,
}

impl IdKind {
    pub const ALL: [IdKind; 14] = [
        IdKind::User,
        IdKind::Bowl,
        IdKind::Tmnt,
        IdKind::Event,
        IdKind::Div,
        IdKind::Squad,
        IdKind::Lane,
        IdKind::Pot,
        IdKind::Brkt,
        IdKind::OneBrkt,
        IdKind::BrktEntry,
        IdKind::Elim,
        IdKind::ElimEntry,
        IdKind::Player,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            IdKind::User => "usr",
            IdKind::Bowl => "bwl",
            IdKind::Tmnt => "tmt",
            IdKind::Event => "evt",
            IdKind::Div => "div",
            IdKind::Squad => "sqd",
            IdKind::Lane => "lan",
            IdKind::Pot => "pot",
            IdKind::Brkt => "brk",
            IdKind::OneBrkt => "obk",
            IdKind::BrktEntry => "ben",
            IdKind::Elim => "elm",
            IdKind::ElimEntry => "een",
            IdKind::Player => "ply",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Kind named by a well-formed id, `None` for anything malformed.
    pub fn kind_of(id: &str) -> Option<Self> {
        let tag = id.get(..ID_TAG_LEN)?;
        let kind = Self::from_tag(tag)?;
        is_valid_id(id, kind).then_some(kind)
    }
}

/// Structural check of `<tag>_<32 lowercase hex>` against the expected kind.
///
/// Never touches storage and never fails loudly: a malformed id is just `false`.
pub fn is_valid_id(id: &str, expected: IdKind) -> bool {
    if id.len() != ID_LEN {
        return false;
    }
    let Some((tag, suffix)) = id.split_once('_') else {
        return false;
    };
    if tag != expected.tag() {
        return false;
    }
    suffix.len() == ID_SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// JSON-facing variant: null and non-string values are invalid.
pub fn is_valid_id_value(value: &serde_json::Value, expected: IdKind) -> bool {
    value
        .as_str()
        .is_some_and(|id| is_valid_id(id, expected))
}
