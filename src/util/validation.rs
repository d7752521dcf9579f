//! Required-field validation for page forms.
//!
//! Exported to JavaScript as `validateForm(formId)`; form submit handlers in
//! the templates gate submission on its result. Each required input gets a
//! red border when blank and the brand teal border when filled.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const REQUIRED_INPUT_SELECTOR: &str = "input[required]";
pub const INVALID_BORDER_COLOR: &str = "#e74c3c";
pub const VALID_BORDER_COLOR: &str = "#40B5AD";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVerdict {
    Valid,
    Invalid,
}

impl FieldVerdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    #[must_use]
    pub fn border_color(self) -> &'static str {
        match self {
            Self::Valid => VALID_BORDER_COLOR,
            Self::Invalid => INVALID_BORDER_COLOR,
        }
    }
}

/// Verdict for a single required field value.
#[must_use]
pub fn verdict(value: &str) -> FieldVerdict {
    if value.trim().is_empty() { FieldVerdict::Invalid } else { FieldVerdict::Valid }
}

/// Per-field verdicts plus the overall result, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub verdicts: Vec<FieldVerdict>,
}

impl ValidationReport {
    /// `true` when every field is valid (vacuously true for no fields).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|v| v.is_valid())
    }

    /// Indices of the fields that should show the invalid cue.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<usize> {
        self.verdicts
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_valid())
            .map(|(i, _)| i)
            .collect()
    }
}

#[must_use]
pub fn validate_values<'a>(values: impl IntoIterator<Item = &'a str>) -> ValidationReport {
    ValidationReport { verdicts: values.into_iter().map(verdict).collect() }
}

/// Check every required input in the form with id `form_id` and mark it.
///
/// A missing form validates as `true` so callers never block on markup that
/// is not on the current page.
#[cfg_attr(feature = "hydrate", wasm_bindgen::prelude::wasm_bindgen(js_name = validateForm))]
pub fn validate_form(form_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlInputElement;

        let Some(form) = super::dom::document().and_then(|d| d.get_element_by_id(form_id)) else {
            return true;
        };
        let fields: Vec<HtmlInputElement> = super::dom::query_all_in(&form, REQUIRED_INPUT_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect();
        let values: Vec<String> = fields.iter().map(HtmlInputElement::value).collect();
        let report = validate_values(values.iter().map(String::as_str));
        for (field, verdict) in fields.iter().zip(&report.verdicts) {
            let _ = field.style().set_property("border-color", verdict.border_color());
        }
        report.is_valid()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_id;
        true
    }
}
