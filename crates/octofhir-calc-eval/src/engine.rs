//! Calculator Evaluation Engine
//!
//! The engine is the boundary between callers and evaluators. Evaluators are
//! expected to be total; if one panics anyway the fault is caught here and
//! turned into a displayable result instead of unwinding into the caller.

use crate::{CalculatorDefinition, Registry};
use octofhir_calc_diagnostics::{CALC0200, CalcError, Result};
use octofhir_calc_types::{CalcResult, ResultLine, Severity, Values};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Title of the result produced for a caught fault
pub const FAULT_TITLE: &str = "Error";

/// Label of the single line produced for a caught fault
pub const FAULT_LABEL: &str = "Compute failed";

/// Guarded evaluation over a registry
#[derive(Debug, Clone, Copy)]
pub struct CalcEngine<'r> {
    registry: &'r Registry,
}

impl<'r> CalcEngine<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Look up a calculator by id and evaluate it.
    ///
    /// Unknown ids are an error; evaluator faults are not (see
    /// [`CalcEngine::evaluate_definition`]).
    pub fn evaluate(&self, id: &str, values: &Values) -> Result<CalcResult> {
        let def = self.registry.get(id)?;
        Ok(self.evaluate_definition(def, values))
    }

    /// Evaluate, reporting a fault as `CALC0200`
    pub fn try_evaluate(&self, def: &CalculatorDefinition, values: &Values) -> Result<CalcResult> {
        let compute = def.compute;
        panic::catch_unwind(AssertUnwindSafe(|| compute(values))).map_err(|payload| {
            CalcError::evaluation(CALC0200, def.id, panic_message(payload.as_ref()))
        })
    }

    /// Evaluate, converting a fault into a result titled `Error` with one
    /// critical `Compute failed` line
    pub fn evaluate_definition(&self, def: &CalculatorDefinition, values: &Values) -> CalcResult {
        match self.try_evaluate(def, values) {
            Ok(result) => result,
            Err(err) => {
                log::error!("calculator '{}' failed: {}", def.id, err);
                let message = match &err {
                    CalcError::Evaluation { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                CalcResult::new(
                    FAULT_TITLE,
                    vec![ResultLine::new(FAULT_LABEL, message, Severity::Critical)],
                )
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "evaluator panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::map;
    use octofhir_calc_diagnostics::CALC0100;
    use octofhir_calc_types::FieldValue;
    use pretty_assertions::assert_eq;

    fn exploding(_values: &Values) -> CalcResult {
        panic!("division table missing")
    }

    const EXPLODING: CalculatorDefinition = CalculatorDefinition {
        id: "exploding",
        name: "Exploding",
        compute: exploding,
        ..map::DEFINITION
    };

    #[test]
    fn test_evaluate_by_id() {
        let registry = Registry::builtin().unwrap();
        let engine = CalcEngine::new(registry);
        let values = Values::new()
            .with("sbp", FieldValue::number("120"))
            .with("dbp", FieldValue::number("70"));
        let result = engine.evaluate("map", &values).unwrap();
        assert_eq!(result.hero().unwrap().value, "86.7 mmHg");

        let err = engine.evaluate("unknown", &values).unwrap_err();
        assert_eq!(err.code(), CALC0100);
    }

    #[test]
    fn test_fault_becomes_error_result() {
        let registry = Registry::new([EXPLODING]).unwrap();
        let engine = CalcEngine::new(&registry);
        let result = engine.evaluate_definition(&EXPLODING, &Values::new());
        assert_eq!(result.title, FAULT_TITLE);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].label, FAULT_LABEL);
        assert_eq!(result.lines[0].value, "division table missing");
        assert_eq!(result.lines[0].severity, Severity::Critical);
    }

    #[test]
    fn test_try_evaluate_reports_code() {
        let registry = Registry::new([EXPLODING]).unwrap();
        let err = CalcEngine::new(&registry)
            .try_evaluate(&EXPLODING, &Values::new())
            .unwrap_err();
        assert_eq!(err.code(), CALC0200);
        assert_eq!(err.subject(), Some("exploding"));
    }
}
