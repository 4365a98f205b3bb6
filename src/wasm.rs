use crate::candidates::{ClueInput, ClueList};
use crate::errors::LayoutError;
use crate::layout::{generate_layout, LayoutStatus};
use crate::logging::init_logger;
use crate::options::LayoutOptions;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "L001", "WASM001")
    code: String,
    message: String,
    description: String,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<LayoutError> for WasmError {
    fn from(e: LayoutError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Must be called from JavaScript once after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("crossgrid WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmLayoutResult {
    grid: Vec<Vec<String>>,
    entries: Vec<crate::numbering::Entry>,
    status: String,
    unplaced: Vec<String>,
}

/// JS entry: (clues: Array<{clue|question: string, answer: string}>, seed: number)
/// returns `{ grid: string[][], entries, status, unplaced }`
#[wasm_bindgen]
pub fn generate_layout_wasm(clues: JsValue, seed: u32) -> Result<JsValue, JsValue> {
    let inputs: Vec<ClueInput> = serde_wasm_bindgen::from_value(clues).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("clues must be an array of {{clue, answer}} objects: {e}"),
        description: "Invalid clue list format".to_string(),
        details: "The clues parameter must be a JavaScript array of objects with string `clue` (or `question`) and `answer` fields.".to_string(),
        help: Some("Example: [{ clue: 'Improvised genre', answer: 'jazz' }]".to_string()),
    })?;

    let options = LayoutOptions::default().with_seed(u64::from(seed));
    let layout = generate_layout(&inputs, &options).map_err(WasmError::from)?;

    let status = match layout.stats.status {
        LayoutStatus::AllPlaced => "all_placed",
        LayoutStatus::AttemptsExhausted => "attempts_exhausted",
        LayoutStatus::TimedOut { .. } => "timed_out",
    };

    let result = WasmLayoutResult {
        grid: layout.grid.to_rows(),
        entries: layout.entries,
        status: status.to_string(),
        unplaced: layout.stats.unplaced,
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The layout could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Parse `ANSWER;clue` lines into an array of `{clue, answer}` objects.
#[wasm_bindgen]
pub fn parse_clue_list(text: &str) -> Result<JsValue, JsValue> {
    let list = ClueList::parse_from_str(text);
    serde_wasm_bindgen::to_value(&list.clues).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize clue list".to_string(),
            details: "The clue list could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
