//! Kind tags for runtime values.
//!
//! Every `Value` maps to exactly one `Kind`. Code outside this crate branches
//! on `Kind` and on the capability queries below, never on the concrete
//! payload.

use std::fmt;

/// Fixed tag identifying a value's variant.
///
/// The `Ord` derive follows declaration order and is only used to break ties
/// between dict keys whose rendered text is identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
    Null,
    String,
    Array,
    Dict,
    Function,
    Builtin,
    Return,
    Error,
    Continue,
    Break,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 13] = [
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::Null,
        Kind::String,
        Kind::Array,
        Kind::Dict,
        Kind::Function,
        Kind::Builtin,
        Kind::Return,
        Kind::Error,
        Kind::Continue,
        Kind::Break,
    ];

    /// The user-visible type name, as printed by `aina()` and in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Integer => "NAMBA",
            Kind::Float => "DESIMALI",
            Kind::Boolean => "BOOLEAN",
            Kind::Null => "TUPU",
            Kind::String => "NENO",
            Kind::Array => "ORODHA",
            Kind::Dict => "KAMUSI",
            Kind::Function => "UNDO (FUNCTION)",
            Kind::Builtin => "YA_NDANI",
            Kind::Return => "RUDISHA",
            Kind::Error => "KOSA",
            Kind::Continue => "ENDELEA",
            Kind::Break => "VUNJA",
        }
    }

    /// Whether values of this kind can be used as dict keys.
    #[inline]
    pub const fn is_hashable(self) -> bool {
        matches!(
            self,
            Kind::Integer | Kind::Float | Kind::Boolean | Kind::String
        )
    }

    /// Whether values of this kind can drive a `kwa` loop.
    #[inline]
    pub const fn is_iterable(self) -> bool {
        matches!(self, Kind::String | Kind::Array | Kind::Dict)
    }

    /// Whether this kind redirects the evaluator instead of carrying data.
    #[inline]
    pub const fn is_signal(self) -> bool {
        matches!(
            self,
            Kind::Return | Kind::Error | Kind::Continue | Kind::Break
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
