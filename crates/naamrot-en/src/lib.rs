// English → Naamrot conversion engine.
//
// The engine rewrites English text into the stylized Naamrot spelling:
// word tokens are located in the input, split into hyphen/apostrophe
// joined parts, and each part is driven through an ordered rule pipeline
// (exception lookup, suffix rules, prefix rules, cluster insertion, vowel
// swap). Everything that is not a word token passes through verbatim, and
// the whole result is upper-cased once at the end.
//
// Feature flags follow the workspace's language-module convention:
// - `tokenize`: the token scanner
// - `convert`: whole-text conversion (implies `tokenize`)
// - `handle`: the `NaamrotHandle` facade (implies `convert`)
// - `config`: JSON rule-file loading for the editable rule tables

pub mod pipeline;
pub mod rules;
pub mod ruleset;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "handle")]
pub mod handle;

pub use ruleset::RuleSet;

#[cfg(feature = "convert")]
pub use convert::{convert, convert_with};

#[cfg(feature = "handle")]
pub use handle::NaamrotHandle;
