//! Parameter-level bits controlling out-of-range value handling.

/// `CLAMP | WRAP` is a supported combination where CLAMP always wins — WRAP
/// is stripped during flag-rule application before range application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamFlags(u8);

impl ParamFlags {
    pub const NONE: ParamFlags = ParamFlags(0);
    pub const CLAMP: ParamFlags = ParamFlags(1 << 0);
    pub const WRAP: ParamFlags = ParamFlags(1 << 1);
    /// Reserved; no behavior required.
    pub const SLEW: ParamFlags = ParamFlags(1 << 2);

    pub fn has_flag(self, flag: ParamFlags) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn union(self, other: ParamFlags) -> ParamFlags {
        ParamFlags(self.0 | other.0)
    }

    /// CLAMP wins when both CLAMP and WRAP are set.
    pub fn effective(self) -> ParamFlags {
        if self.has_flag(ParamFlags::CLAMP) {
            ParamFlags(self.0 & !ParamFlags::WRAP.0)
        } else {
            self
        }
    }

    pub fn name(self) -> String {
        let mut parts = Vec::new();
        if self.has_flag(ParamFlags::CLAMP) {
            parts.push("clamp");
        }
        if self.has_flag(ParamFlags::WRAP) {
            parts.push("wrap");
        }
        if self.has_flag(ParamFlags::SLEW) {
            parts.push("slew");
        }
        parts.join(",")
    }

    /// Liberal substring parser: tokens are separated by any non-alphabetic
    /// run, and each token is matched as a substring of "clamp"/"wrap"/"slew".
    /// Unknown tokens are ignored.
    pub fn from_str_liberal(s: &str) -> ParamFlags {
        let mut flags = ParamFlags::NONE;
        for token in s.split(|c: char| !c.is_alphabetic()).filter(|t| !t.is_empty()) {
            let token = token.to_lowercase();
            if "clamp".contains(&token) || token.contains("clamp") {
                flags = flags.union(ParamFlags::CLAMP);
            }
            if "wrap".contains(&token) || token.contains("wrap") {
                flags = flags.union(ParamFlags::WRAP);
            }
            if "slew".contains(&token) || token.contains("slew") {
                flags = flags.union(ParamFlags::SLEW);
            }
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_wins_over_wrap() {
        let flags = ParamFlags::CLAMP.union(ParamFlags::WRAP);
        assert!(flags.effective().has_flag(ParamFlags::CLAMP));
        assert!(!flags.effective().has_flag(ParamFlags::WRAP));
    }

    #[test]
    fn liberal_parser_accepts_separators() {
        let flags = ParamFlags::from_str_liberal("clamp, wrap");
        assert!(flags.has_flag(ParamFlags::CLAMP));
        assert!(flags.has_flag(ParamFlags::WRAP));
    }

    #[test]
    fn liberal_parser_ignores_unknown_tokens() {
        let flags = ParamFlags::from_str_liberal("bogus");
        assert_eq!(flags, ParamFlags::NONE);
    }
}
