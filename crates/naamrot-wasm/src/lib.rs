// WASM bindings for the Naamrot text converter.
//
// Provides a `WasmNaamrot` class exported via wasm-bindgen that wraps
// the `NaamrotHandle` from naamrot-en. Token lists are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const naamrot = new WasmNaamrot();
//   naamrot.convert("don't stop");   // => "DAN'T STAP"
//   naamrot.tokens("don't stop");    // => [{ tokenType: "Word", ... }, ...]
//
//   const custom = WasmNaamrot.withRules(rulesJson);
//
// The web page around this is thin glue: it feeds the text box content to
// `convert` and displays (or copies) the returned string.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use naamrot_en::{NaamrotHandle, RuleSet};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: String,
    text: String,
    token_len: usize,
    pos: usize,
}

fn token_type_to_string(tt: naamrot_core::token::TokenType) -> String {
    match tt {
        naamrot_core::token::TokenType::None => "None".to_string(),
        naamrot_core::token::TokenType::Word => "Word".to_string(),
        naamrot_core::token::TokenType::Whitespace => "Whitespace".to_string(),
        naamrot_core::token::TokenType::Digit => "Digit".to_string(),
        naamrot_core::token::TokenType::Punctuation => "Punctuation".to_string(),
        naamrot_core::token::TokenType::Other => "Other".to_string(),
    }
}

// ============================================================================
// WasmNaamrot
// ============================================================================

/// Naamrot converter for WebAssembly.
#[wasm_bindgen]
pub struct WasmNaamrot {
    handle: NaamrotHandle,
}

#[wasm_bindgen]
impl WasmNaamrot {
    /// Create a converter with the built-in rule tables.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmNaamrot {
        WasmNaamrot {
            handle: NaamrotHandle::new(),
        }
    }

    /// Create a converter from a JSON rule file (see `RuleSet::from_json`).
    #[wasm_bindgen(js_name = withRules)]
    pub fn with_rules(rules_json: &str) -> Result<WasmNaamrot, JsError> {
        let rules = RuleSet::from_json(rules_json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmNaamrot {
            handle: NaamrotHandle::with_rules(rules),
        })
    }

    /// Convert text to Naamrot.
    pub fn convert(&self, text: &str) -> String {
        self.handle.convert(text)
    }

    /// Tokenize text without converting it.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = self
            .handle
            .tokens(text)
            .into_iter()
            .map(|t| JsToken {
                token_type: token_type_to_string(t.token_type),
                text: t.text,
                token_len: t.token_len,
                pos: t.pos,
            })
            .collect();
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for WasmNaamrot {
    fn default() -> Self {
        Self::new()
    }
}
