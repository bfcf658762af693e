//! Tier classification from detection results.

/// Strongest traversal tier a type reaches.
///
/// Bidirectional and random access are siblings above forward; a finite
/// random-access range is reported as `RandomAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Not a range.
    None,
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Tier {
    pub const fn classify(input: bool, forward: bool, bidirectional: bool, random: bool) -> Tier {
        if !input {
            Tier::None
        } else if random {
            Tier::RandomAccess
        } else if bidirectional {
            Tier::Bidirectional
        } else if forward {
            Tier::Forward
        } else {
            Tier::Input
        }
    }

    /// Whether this tier can be cloned to re-traverse.
    #[inline]
    pub const fn is_multi_pass(self) -> bool {
        !matches!(self, Tier::None | Tier::Input)
    }
}

/// Every detection result for one concrete type, as produced by `range_caps!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub input: bool,
    pub forward: bool,
    pub bidirectional: bool,
    pub random_access: bool,
    pub length: bool,
    pub contiguous: bool,
    pub assignable: bool,
    pub infinite: bool,
}

impl Capabilities {
    #[inline]
    pub const fn tier(&self) -> Tier {
        Tier::classify(self.input, self.forward, self.bidirectional, self.random_access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefers_strongest() {
        assert_eq!(Tier::classify(false, false, false, false), Tier::None);
        assert_eq!(Tier::classify(true, false, false, false), Tier::Input);
        assert_eq!(Tier::classify(true, true, false, false), Tier::Forward);
        assert_eq!(Tier::classify(true, true, true, false), Tier::Bidirectional);
        assert_eq!(Tier::classify(true, true, true, true), Tier::RandomAccess);
        assert!(!Tier::Input.is_multi_pass());
        assert!(Tier::Forward.is_multi_pass());
    }
}
