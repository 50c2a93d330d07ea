/// WASM-compatible diagnostic types.
///
/// Geometry warnings and errors are flattened into [`Diagnostic`]s so the
/// browser can list them next to the chart.
use fluvial_geometry::{ChannelError, GeometryWarning};
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const diag = handle.diagnostics().get(0);
/// // console.log(diag.code(), diag.message());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: String,
    message: String,
    hint: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns a stable machine-readable code, e.g. `"overhangs"`.
    pub fn code(&self) -> String {
        self.code.clone()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the hint, if any.
    pub fn hint(&self) -> Option<String> {
        self.hint.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// wasm-bindgen wrappers cannot be posted between a worker and the main
    /// thread; plain objects can.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        for (key, field) in self.object_fields() {
            let value = match field {
                ObjectField::Number(n) => JsValue::from_f64(n),
                ObjectField::Text(text) => JsValue::from_str(text),
            };
            Reflect::set(&obj, &JsValue::from_str(key), &value)?;
        }
        Ok(JsValue::from(obj))
    }
}

/// A property value of the plain object built by `to_js_object`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ObjectField<'a> {
    Number(f64),
    Text(&'a str),
}

impl Diagnostic {
    pub(crate) fn new(severity: Severity, code: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    /// Properties of the plain-object form; `hint` only when present.
    fn object_fields(&self) -> Vec<(&'static str, ObjectField<'_>)> {
        let mut fields = vec![
            ("severity", ObjectField::Number(f64::from(self.severity as i32))),
            ("code", ObjectField::Text(&self.code)),
            ("message", ObjectField::Text(&self.message)),
        ];
        if let Some(hint) = &self.hint {
            fields.push(("hint", ObjectField::Text(hint)));
        }
        fields
    }
}

impl From<&GeometryWarning> for Diagnostic {
    fn from(warning: &GeometryWarning) -> Self {
        match warning {
            GeometryWarning::Overhangs { .. } => {
                Diagnostic::new(Severity::Warning, "overhangs", warning.to_string())
                    .with_hint("adjust fill_fraction to cut (0) or fill (1) undercut banks")
            }
            GeometryWarning::ThalwegOutOfBounds { .. } => {
                Diagnostic::new(Severity::Warning, "thalweg_out_of_bounds", warning.to_string())
            }
        }
    }
}

impl From<&ChannelError> for Diagnostic {
    fn from(err: &ChannelError) -> Self {
        let code = match err {
            ChannelError::ShapeMismatch { .. } => "shape_mismatch",
            ChannelError::InsufficientPoints { .. } => "insufficient_points",
            ChannelError::InvalidGeometry { .. } => "invalid_geometry",
            ChannelError::InvalidParameter { .. } => "invalid_parameter",
            ChannelError::BelowChannel { .. } => "below_channel",
            ChannelError::ThalwegAboveBankfull { .. } => "thalweg_above_bankfull",
            ChannelError::NonConvergence { .. } => "non_convergence",
            ChannelError::Config(_) => "config",
        };
        let diagnostic = Diagnostic::new(Severity::Error, code, err.to_string());
        match err {
            ChannelError::InvalidGeometry { .. } => {
                diagnostic.with_hint("check the shot order; the survey crosses itself")
            }
            _ => diagnostic,
        }
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }
}

impl DiagnosticList {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
