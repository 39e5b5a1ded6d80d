//! HTTP verbs recognized as export names.

/// An HTTP verb a handler module can export under.
///
/// `All` registers for every method. The export name `del` is accepted as an
/// alias for `delete` (it avoids colliding with language keywords in handler
/// modules) and normalizes to [`Verb::Delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// GET requests.
    Get,
    /// POST requests.
    Post,
    /// PUT requests.
    Put,
    /// PATCH requests.
    Patch,
    /// DELETE requests (exported as `delete` or `del`).
    Delete,
    /// Every method.
    All,
}

impl Verb {
    /// Parses a module export name into a verb.
    ///
    /// Returns `None` for names that are not recognized verbs; strict-mode
    /// builds treat those as errors.
    pub fn from_export_name(name: &str) -> Option<Self> {
        match name {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" | "del" => Some(Self::Delete),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the canonical lowercase verb name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
