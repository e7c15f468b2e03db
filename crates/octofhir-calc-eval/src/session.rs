//! Calculator session
//!
//! A session is the caller-side state of one open calculator: which
//! definition is active and the raw values entered so far. The result is
//! recomputed on every read, so it can never go stale.

use crate::{CalcEngine, CalculatorDefinition, Registry, summary_text};
use octofhir_calc_diagnostics::{CALC0006, CalcError, Result};
use octofhir_calc_types::{CalcResult, Values};

/// The active calculator and its values
#[derive(Debug, Clone)]
pub struct CalcSession<'r> {
    engine: CalcEngine<'r>,
    active: Option<(&'r CalculatorDefinition, Values)>,
}

impl<'r> CalcSession<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            engine: CalcEngine::new(registry),
            active: None,
        }
    }

    /// Make `id` the active calculator with every field at its default.
    ///
    /// Re-opening the active calculator also resets it.
    pub fn open(&mut self, id: &str) -> Result<&'r CalculatorDefinition> {
        let def = self.engine.registry().get(id)?;
        log::debug!("opened calculator '{}'", def.id);
        self.active = Some((def, def.initial_values()));
        Ok(def)
    }

    pub fn close(&mut self) {
        if let Some((def, _)) = self.active.take() {
            log::debug!("closed calculator '{}'", def.id);
        }
    }

    pub fn active(&self) -> Option<&'r CalculatorDefinition> {
        self.active.as_ref().map(|(def, _)| *def)
    }

    pub fn values(&self) -> Option<&Values> {
        self.active.as_ref().map(|(_, values)| values)
    }

    /// Apply a single-field edit to the active calculator.
    ///
    /// A rejected edit leaves the values untouched. Editing with no active
    /// calculator fails with `CALC0006`.
    pub fn edit(&mut self, key: &str, raw: &str) -> Result<()> {
        let Some((def, values)) = self.active.as_mut() else {
            return Err(CalcError::input_for(
                CALC0006,
                key,
                format!("cannot edit '{}' with no calculator open", key),
            ));
        };
        def.apply_edit(values, key, raw).inspect_err(|err| {
            log::warn!("rejected edit of '{}' in '{}': {}", key, def.id, err);
        })
    }

    /// Back to defaults, keeping the active calculator
    pub fn reset(&mut self) {
        if let Some((def, values)) = self.active.as_mut() {
            *values = def.initial_values();
        }
    }

    /// Current result of the active calculator
    pub fn result(&self) -> Option<CalcResult> {
        let (def, values) = self.active.as_ref()?;
        Some(self.engine.evaluate_definition(def, values))
    }

    pub fn has_any_input(&self) -> bool {
        self.values().is_some_and(Values::has_any_input)
    }

    /// Summary text, once something has been entered
    pub fn copy_text(&self) -> Option<String> {
        if !self.has_any_input() {
            return None;
        }
        let (def, values) = self.active.as_ref()?;
        let result = self.engine.evaluate_definition(def, values);
        Some(summary_text(def, values, &result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_calc_diagnostics::{CALC0003, CALC0100};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edit_and_recompute() {
        let mut session = CalcSession::new(Registry::builtin().unwrap());
        session.open("shock_index").unwrap();
        assert!(session.result().unwrap().is_empty());
        assert_eq!(session.copy_text(), None);

        session.edit("hr", "110").unwrap();
        session.edit("sbp", "100").unwrap();
        let result = session.result().unwrap();
        assert_eq!(result.hero().unwrap().value, "1.1");
        assert!(session.copy_text().is_some());
    }

    #[test]
    fn test_rejected_edit_keeps_values() {
        let mut session = CalcSession::new(Registry::builtin().unwrap());
        session.open("bmi").unwrap();
        let before = session.values().unwrap().clone();
        let err = session.edit("units", "stone").unwrap_err();
        assert_eq!(err.code(), CALC0003);
        assert_eq!(session.values().unwrap(), &before);
    }

    #[test]
    fn test_reset_and_reopen() {
        let mut session = CalcSession::new(Registry::builtin().unwrap());
        session.open("map").unwrap();
        session.edit("sbp", "120").unwrap();
        assert!(session.has_any_input());

        session.reset();
        assert!(!session.has_any_input());
        assert_eq!(session.active().unwrap().id, "map");

        session.edit("sbp", "120").unwrap();
        session.open("map").unwrap();
        assert!(!session.has_any_input());
    }

    #[test]
    fn test_open_unknown_keeps_active() {
        let mut session = CalcSession::new(Registry::builtin().unwrap());
        session.open("papi").unwrap();
        assert_eq!(session.open("nope").unwrap_err().code(), CALC0100);
        assert_eq!(session.active().unwrap().id, "papi");

        session.close();
        assert!(session.active().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_edit_without_open_calculator() {
        let mut session = CalcSession::new(Registry::builtin().unwrap());
        let err = session.edit("sbp", "120").unwrap_err();
        assert_eq!(err.code(), CALC0006);
        assert_eq!(err.subject(), Some("sbp"));

        session.open("map").unwrap();
        session.close();
        assert_eq!(session.edit("sbp", "120").unwrap_err().code(), CALC0006);
        assert!(!session.has_any_input());
    }
}
