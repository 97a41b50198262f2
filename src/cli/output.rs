//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, YomiArgs};
use crate::error::Result;

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub input_bytes: usize,
    pub duration_ms: u64,
}

/// One sentence of a document, as byte offsets into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
    pub runes: usize,
    pub text: String,
}

/// Result structure for sentence splitting.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentencesResult {
    pub sentences: Vec<SentenceSpan>,
    pub input_bytes: usize,
}

/// Result structure for pattern table validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatternTableResult {
    pub path: String,
    pub patterns: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &YomiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &YomiArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("TokenizeResult") => {
            output_tokens_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("SentencesResult") => {
            output_sentences_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output tokens in human format, one per line.
fn output_tokens_human(value: &serde_json::Value, args: &YomiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_array()) {
            for token in tokens {
                let text = token.get("text").and_then(|t| t.as_str()).unwrap_or("");
                let position = token.get("position").and_then(|p| p.as_u64()).unwrap_or(0);
                let start = token.get("start_offset").and_then(|s| s.as_u64()).unwrap_or(0);
                let end = token.get("end_offset").and_then(|e| e.as_u64()).unwrap_or(0);
                println!("{position}\t{start}\t{end}\t{text}");
            }

            if args.verbosity() > 1 {
                println!();
                println!("Tokens: {}", tokens.len());
            }
        }

        if args.verbosity() > 1
            && let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64())
        {
            let bytes = obj.get("input_bytes").and_then(|b| b.as_u64()).unwrap_or(0);
            println!("Input: {}", format_bytes(bytes));
            println!("Tokenize time: {duration}ms");
        }
    }
    Ok(())
}

/// Output sentences in human format, one per line.
fn output_sentences_human(value: &serde_json::Value, _args: &YomiArgs) -> Result<()> {
    if let Some(sentences) = value.get("sentences").and_then(|s| s.as_array()) {
        for sentence in sentences {
            let start = sentence.get("start").and_then(|s| s.as_u64()).unwrap_or(0);
            let end = sentence.get("end").and_then(|e| e.as_u64()).unwrap_or(0);
            let text = sentence.get("text").and_then(|t| t.as_str()).unwrap_or("");
            println!("{start}\t{end}\t{}", text.escape_debug());
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &YomiArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &YomiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        serde_json::Value::Object(_) => value.to_string(),
    }
}

/// Format bytes into human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
