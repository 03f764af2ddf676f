// Full pipeline demo: convert a few sample sentences and show the token
// stream for the first one.
use naamrot_core::token::TokenType;
use naamrot_en::NaamrotHandle;

fn main() {
    let handle = NaamrotHandle::new();

    let samples = [
        "Please don't stop!",
        "The information is clean.",
        "A snake ate my paramedic, slowly.",
        "Remember the station at the end of the street?",
    ];

    for text in &samples {
        println!("{:48} → {}", text, handle.convert(text));
    }

    println!();
    println!("tokens of {:?}:", samples[0]);
    for token in handle.tokens(samples[0]) {
        let kind = match token.token_type {
            TokenType::Word => "WORD",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Digit => "DIGIT",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Other => "OTHER",
            TokenType::None => "NONE",
        };
        println!("  {kind:12} [{:>2}..{:>2}] {:?}", token.pos, token.pos + token.token_len, token.text);
    }
}
