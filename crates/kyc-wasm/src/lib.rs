//! WASM bindings for identity document extraction and validation.
//!
//! Text recognition happens on the JavaScript side; these bindings take the
//! recognized text (or typed form input) and return plain JS objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use kyc_core::{ConfidenceLevel, DocumentType, KycValidator, ManualFields, ValidationResult};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Plain objects and `null` for missing fields, rather than JS `Map`s and
/// `undefined`.
fn to_js(result: &ValidationResult) -> Result<JsValue, JsValue> {
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

fn parse_type(document_type: &str) -> Result<DocumentType, JsValue> {
    document_type.parse().map_err(to_js_error)
}

/// Extract and validate fields from recognized text.
///
/// Throws for unsupported document types; validation findings are reported
/// in the returned object's `validation_errors`.
#[wasm_bindgen]
pub fn extract_and_validate(document_type: &str, text: &str) -> Result<JsValue, JsValue> {
    let document_type = parse_type(document_type)?;
    let result = KycValidator::new()
        .extract_and_validate(document_type, text)
        .map_err(to_js_error)?;

    to_js(&result)
}

/// Validate manually entered fields.
///
/// `fields` is an object with `document_number` and optional `name`,
/// `date_of_birth` (or `dob`) and `address`.
#[wasm_bindgen]
pub fn validate_manual(document_type: &str, fields: JsValue) -> Result<JsValue, JsValue> {
    let document_type = parse_type(document_type)?;
    let fields: ManualFields = serde_wasm_bindgen::from_value(fields).map_err(to_js_error)?;
    let result = KycValidator::new()
        .validate_manual(document_type, &fields)
        .map_err(to_js_error)?;

    to_js(&result)
}

/// Detect the document type of recognized text; `"unknown"` when no marker
/// is found.
#[wasm_bindgen]
pub fn detect_document_type(text: &str) -> String {
    kyc_core::detect_document_type(text).to_string()
}

/// Confidence label for a number of validation errors.
#[wasm_bindgen]
pub fn confidence_for(error_count: usize) -> String {
    ConfidenceLevel::from_error_count(error_count).to_string()
}

/// Document types accepted by the extraction functions.
#[wasm_bindgen]
pub fn supported_document_types() -> js_sys::Array {
    DocumentType::SUPPORTED
        .iter()
        .map(|t| JsValue::from_str(t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_detect_document_type() {
        assert_eq!(detect_document_type("INCOME TAX DEPARTMENT"), "tax_id");
        assert_eq!(detect_document_type("hello"), "unknown");
    }

    #[wasm_bindgen_test]
    fn test_confidence_for() {
        assert_eq!(confidence_for(0), "High");
        assert_eq!(confidence_for(2), "Medium");
        assert_eq!(confidence_for(3), "Low");
    }

    #[wasm_bindgen_test]
    fn test_unknown_type_throws() {
        assert!(extract_and_validate("unknown", "text").is_err());
        assert!(extract_and_validate("passport", "text").is_err());
    }

    #[wasm_bindgen_test]
    fn test_validate_manual_accepts_dob_alias() {
        let fields = js_sys::Object::new();
        js_sys::Reflect::set(&fields, &"document_number".into(), &"ABCDE1234F".into()).unwrap();
        js_sys::Reflect::set(&fields, &"dob".into(), &"1990-08-15".into()).unwrap();

        let result = validate_manual("tax_id", fields.clone().into()).unwrap();
        let errors = js_sys::Reflect::get(&result, &"validation_errors".into()).unwrap();
        assert_eq!(js_sys::Array::from(&errors).length(), 1);

        let data = js_sys::Reflect::get(&result, &"extracted_data".into()).unwrap();
        let dob = js_sys::Reflect::get(&data, &"date_of_birth".into()).unwrap();
        assert_eq!(dob.as_string(), Some("1990-08-15".to_string()));
        let address = js_sys::Reflect::get(&data, &"address".into()).unwrap();
        assert!(address.is_null());

        assert!(validate_manual("unknown", fields.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_supported_document_types() {
        assert_eq!(supported_document_types().length(), 3);
    }
}
