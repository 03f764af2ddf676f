// Token scanner.
//
// Word tokens are maximal runs of ASCII letters, optionally joined by
// single hyphens or apostrophes with a letter on both sides. Everything
// else is reported span by span so the caller can pass it through
// verbatim.

use naamrot_core::character::{CharType, get_char_type, is_word_separator};
use naamrot_core::token::{Token, TokenType};

/// Compute the length of a word token starting at the beginning of
/// `text`. The first character must already be a letter.
fn word_length(text: &[char]) -> usize {
    let mut wlen = 0;
    while wlen < text.len() {
        let c = text[wlen];
        if get_char_type(c) == CharType::Letter {
            wlen += 1;
            continue;
        }
        // A single separator continues the word only when a letter
        // follows; "don''t" and a trailing "don'" both end the token.
        if is_word_separator(c)
            && wlen + 1 < text.len()
            && get_char_type(text[wlen + 1]) == CharType::Letter
        {
            wlen += 1;
            continue;
        }
        break;
    }
    wlen
}

/// Find the next token starting at position `pos` in the text.
///
/// Returns `(TokenType, token_length)`. The caller advances `pos` by
/// `token_length` to process subsequent tokens.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    if pos >= text.len() {
        return (TokenType::None, 0);
    }

    let slice = &text[pos..];

    match get_char_type(slice[0]) {
        CharType::Letter => (TokenType::Word, word_length(slice)),
        CharType::Whitespace => {
            let mut i = 1;
            while i < slice.len() && get_char_type(slice[i]) == CharType::Whitespace {
                i += 1;
            }
            (TokenType::Whitespace, i)
        }
        CharType::Digit => {
            let mut i = 1;
            while i < slice.len() && get_char_type(slice[i]) == CharType::Digit {
                i += 1;
            }
            (TokenType::Digit, i)
        }
        CharType::Punctuation => (TokenType::Punctuation, 1),
        CharType::Other => (TokenType::Other, 1),
    }
}

/// Tokenize an entire string.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let (token_type, len) = next_token(&chars, pos);
        if token_type == TokenType::None {
            break;
        }
        let text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, text, pos));
        pos += len;
    }
    tokens
}
