/// A unit of the word stream after compound merging
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// Index of the first raw word this token was forged from
    pub start: usize,
    /// Number of raw words merged into this token (1 unless it is a compound)
    pub words: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, words: usize) -> Self {
        Self {
            text: text.into(),
            start,
            words,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.words > 1
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
