//! Tokenized view of one raw command invocation.

/// An immutable, whitespace-split view of one invocation's text.
///
/// Token 0 is the invoked command name itself; arguments start at token 1.
/// No normalization beyond the initial split is applied; callers that
/// want case-insensitive matching compare tokens themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<String>,
}

impl Tokens {
    /// Splits the raw invocation text (any command prefix already
    /// stripped) at whitespace boundaries.
    pub fn parse(input: &str) -> Self {
        Self {
            tokens: input.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Number of tokens, the command-name token included.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The token at `index`, verbatim.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// All tokens from `from` onward, re-joined with single spaces.
    ///
    /// Returns an empty string when `from` is past the last token. This is
    /// what lets a final free-form parameter span several words without
    /// quoting.
    pub fn tail(&self, from: usize) -> String {
        if from >= self.tokens.len() {
            return String::new();
        }
        self.tokens[from..].join(" ")
    }
}
