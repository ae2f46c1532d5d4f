//! Transaction form data and feature assembly.
//!
//! The form fields arrive as free text. Numeric fields missing from the
//! submission default to `0`; text that does not parse as a number is a
//! per-request error, never a panic.

use serde::Deserialize;

use super::artifacts::CategoryEncoder;
use super::error::PredictError;

/// One submitted transaction, request-scoped, never persisted.
///
/// Field names mirror the HTML form (and the PaySim dataset the model was
/// trained on).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub step: Option<String>,
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(rename = "oldbalanceOrg", default)]
    pub old_balance_org: Option<String>,
    #[serde(rename = "newbalanceOrig", default)]
    pub new_balance_orig: Option<String>,
    #[serde(rename = "oldbalanceDest", default)]
    pub old_balance_dest: Option<String>,
    #[serde(rename = "newbalanceDest", default)]
    pub new_balance_dest: Option<String>,
}

impl TransactionForm {
    /// The raw type label as submitted; a missing field is passed to the
    /// encoder as an empty label, which the encoder rejects.
    pub fn type_label(&self) -> &str {
        self.tx_type.as_deref().unwrap_or("")
    }

    /// Coerce the numeric fields and assemble the model input.
    ///
    /// The element order must exactly match the order the model was trained
    /// on; reordering silently corrupts predictions.
    pub fn feature_vector(
        &self,
        encoder: &dyn CategoryEncoder,
    ) -> Result<[f32; 7], PredictError> {
        let step = numeric_field("step", self.step.as_deref())?;
        let amount = numeric_field("amount", self.amount.as_deref())?;
        let old_balance_org = numeric_field("oldbalanceOrg", self.old_balance_org.as_deref())?;
        let new_balance_orig = numeric_field("newbalanceOrig", self.new_balance_orig.as_deref())?;
        let old_balance_dest = numeric_field("oldbalanceDest", self.old_balance_dest.as_deref())?;
        let new_balance_dest = numeric_field("newbalanceDest", self.new_balance_dest.as_deref())?;

        let type_encoded = encoder.encode(self.type_label())? as f32;

        Ok([
            step,
            type_encoded,
            amount,
            old_balance_org,
            new_balance_orig,
            old_balance_dest,
            new_balance_dest,
        ])
    }
}

/// Missing fields default to `0`; present but non-numeric text is an error.
fn numeric_field(name: &str, value: Option<&str>) -> Result<f32, PredictError> {
    match value {
        None => Ok(0.0),
        Some(raw) => raw
            .trim()
            .parse::<f32>()
            .map_err(|_| PredictError::bad_input(name, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::artifacts::mock::MockEncoder;
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> TransactionForm {
        let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        serde_urlencoded::from_str(&query.join("&")).unwrap()
    }

    #[test]
    fn test_feature_order() {
        let form = form(&[
            ("step", "5"),
            ("type", "TRANSFER"),
            ("amount", "1000"),
            ("oldbalanceOrg", "2000"),
            ("newbalanceOrig", "1000"),
            ("oldbalanceDest", "0"),
            ("newbalanceDest", "1000"),
        ]);

        let features = form.feature_vector(&MockEncoder::new()).unwrap();
        assert_eq!(features, [5.0, 2.0, 1000.0, 2000.0, 1000.0, 0.0, 1000.0]);
    }

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let form = form(&[("type", "CASH_OUT")]);

        let features = form.feature_vector(&MockEncoder::new()).unwrap();
        assert_eq!(features, [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_non_numeric_field_is_bad_input() {
        let form = form(&[("type", "TRANSFER"), ("amount", "abc")]);

        let error = form.feature_vector(&MockEncoder::new()).unwrap_err();
        assert!(matches!(error, PredictError::BadInput { .. }));
        assert!(error.to_string().contains("amount"));
    }

    #[test]
    fn test_coercion_checked_before_encoding() {
        // A bad number and an unseen category together report the number.
        let form = form(&[("type", "WIRE"), ("step", "x")]);

        let error = form.feature_vector(&MockEncoder::new()).unwrap_err();
        assert!(matches!(error, PredictError::BadInput { .. }));
    }

    #[test]
    fn test_unseen_category() {
        let form = form(&[("type", "WIRE"), ("amount", "10")]);

        let error = form.feature_vector(&MockEncoder::new()).unwrap_err();
        assert!(matches!(error, PredictError::UnknownCategory { .. }));
    }

    #[test]
    fn test_missing_type_rejected_by_encoder() {
        let form = form(&[("amount", "10")]);

        assert_eq!(form.type_label(), "");
        let error = form.feature_vector(&MockEncoder::new()).unwrap_err();
        assert!(matches!(error, PredictError::UnknownCategory { .. }));
    }

    #[test]
    fn test_whitespace_tolerated_in_numbers() {
        let form = form(&[("type", "TRANSFER"), ("amount", " 12.5 ")]);

        let features = form.feature_vector(&MockEncoder::new()).unwrap();
        assert_eq!(features[2], 12.5);
    }
}
