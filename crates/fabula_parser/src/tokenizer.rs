//! Input tokenization.
//!
//! Splits a player sentence on whitespace, clause terminators (`. , ; :`)
//! and `?`. Quoted spans are kept whole and not split. Each word carries
//! the byte offset of the text that follows it, so the parser can hand the
//! rest of the sentence to a later clause.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A lowercase word.
    Word {
        /// The word.
        text: String,
        /// Offset just past the delimiter that ended the word.
        rest: usize,
    },
    /// Text between matching quotes, lowercased.
    Quoted(String),
    /// A clause terminator.
    Terminator {
        /// Offset just past the terminator.
        rest: usize,
    },
}

/// True for `. , ; :`.
#[must_use]
pub const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':')
}

const fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace() || c == '?' || is_terminator(c)
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Words and quoted spans are lowercased
    /// - `"…"` and `'…'` spans become [`InputToken::Quoted`]; an
    ///   unterminated quote runs to the end of the input
    /// - Clause terminators are reported so the caller can decide whether
    ///   they end the clause
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        let mut chars = input.char_indices();

        while let Some((i, c)) = chars.next() {
            if c == '"' || c == '\'' {
                flush(input, &mut start, i, i, &mut tokens);
                let open = i + c.len_utf8();
                let mut close = input.len();
                for (j, d) in chars.by_ref() {
                    if d == c {
                        close = j;
                        break;
                    }
                }
                tokens.push(InputToken::Quoted(input[open..close].to_lowercase()));
            } else if is_delimiter(c) {
                let rest = i + c.len_utf8();
                flush(input, &mut start, i, rest, &mut tokens);
                if is_terminator(c) {
                    tokens.push(InputToken::Terminator { rest });
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        flush(input, &mut start, input.len(), input.len(), &mut tokens);
        tokens
    }
}

fn flush(input: &str, start: &mut Option<usize>, end: usize, rest: usize, tokens: &mut Vec<InputToken>) {
    if let Some(s) = start.take() {
        tokens.push(InputToken::Word {
            text: input[s..end].to_lowercase(),
            rest,
        });
    }
}
