//! Indentation configuration for generated source.

/// Indentation unit for generated TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the TypeScript default.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// 8-space indentation.
    pub const EIGHT_SPACES: Self = Self::Spaces(8);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback for unusual widths
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO_SPACES
    }
}
