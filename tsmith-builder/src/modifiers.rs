//! Member accessibility modifiers.

/// TypeScript accessibility modifier.
///
/// Members carry `Option<Accessibility>`; `None` means no modifier is
/// printed, which TypeScript treats as public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

impl Accessibility {
    /// Keyword form, without trailing space.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Accessibility::Public.keyword(), "public");
        assert_eq!(Accessibility::Protected.keyword(), "protected");
        assert_eq!(Accessibility::Private.keyword(), "private");
    }
}
