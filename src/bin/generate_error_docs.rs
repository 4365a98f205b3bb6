//! Generate error code documentation from the source of truth (`LayoutError`).
//!
//! Codes, descriptions, details and help text come straight from the enum's
//! `code()`, `description()`, `details()` and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossgrid::errors::{LayoutError, MIN_LAYOUT_WORDS};

/// One representative value per variant, in code order.
fn all_layout_error_variants() -> Vec<LayoutError> {
    vec![
        LayoutError::TooFewValidWords { valid: 2, required: MIN_LAYOUT_WORDS },
        LayoutError::LayoutConstructionFailed { best_placed: 1, candidates: 3 },
    ]
}

fn print_error_doc(error: &LayoutError) {
    println!("### {}: {}\n", error.code(), error.description());
    println!("**Details:** {}\n", error.details());

    if let Some(help_text) = error.help() {
        println!("**How to fix:**");
        println!("```");
        println!("{help_text}");
        println!("```\n");
    }

    println!("**Example error message:**");
    println!("```");
    println!("{error}");
    println!("```\n");

    println!("**Detailed format:**");
    println!("```");
    println!("{}", error.display_detailed());
    println!("```\n");

    println!("---\n");
}

fn main() {
    let errors = all_layout_error_variants();

    println!("# crossgrid Error Codes\n");
    println!("This document is generated by `cargo run --bin generate_error_docs`. Do not edit by hand.\n");

    println!("## Layout Errors (L001-L{:03})\n", errors.len());
    for error in &errors {
        print_error_doc(error);
    }

    println!("## WASM Errors\n");
    println!("- **WASM001**: the `clues` argument was not an array of `{{clue, answer}}` objects.");
    println!("- **WASM002**: the layout could not be serialized back to JavaScript.");
    println!("- **WASM003**: a parsed clue list could not be serialized back to JavaScript.");
}
