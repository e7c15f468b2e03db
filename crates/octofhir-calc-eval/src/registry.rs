//! Calculator registry
//!
//! The registry owns the set of definitions, validates it once at
//! construction, and presents it sorted by display name.

use crate::CalculatorDefinition;
use crate::calculators;
use octofhir_calc_diagnostics::{
    CALC0100, CALC0101, CALC0102, CALC0103, CALC0104, CALC0105, CalcError, Result,
};
use octofhir_calc_types::FieldKind;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static BUILTIN: LazyLock<Result<Registry>> =
    LazyLock::new(|| Registry::new(calculators::ALL.iter().copied()));

/// A validated, name-sorted set of calculator definitions
#[derive(Debug, Clone)]
pub struct Registry {
    calculators: Vec<CalculatorDefinition>,
    by_id: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry, rejecting blank identities, duplicate ids,
    /// duplicate field keys and select fields without options.
    ///
    /// Every problem is reported; more than one comes back as
    /// [`CalcError::Multiple`].
    pub fn new(definitions: impl IntoIterator<Item = CalculatorDefinition>) -> Result<Self> {
        let mut calculators: Vec<_> = definitions.into_iter().collect();

        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        for def in &calculators {
            validate(def, &mut errors);
            if !def.id.trim().is_empty() && !seen.insert(def.id) {
                errors.push(CalcError::registry_for(
                    CALC0101,
                    def.id,
                    format!("Calculator id '{}' is registered more than once", def.id),
                ));
            }
        }
        match errors.len() {
            0 => {}
            1 => return Err(errors.remove(0)),
            _ => return Err(CalcError::Multiple(errors)),
        }

        calculators.sort_by(|a, b| collate(a.name, b.name));
        let by_id = calculators
            .iter()
            .enumerate()
            .map(|(index, def)| (def.id, index))
            .collect();

        log::debug!("registry built with {} calculators", calculators.len());
        Ok(Self { calculators, by_id })
    }

    /// The built-in calculator set, validated on first use
    pub fn builtin() -> Result<&'static Registry> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// All definitions, sorted by name
    pub fn all(&self) -> &[CalculatorDefinition] {
        &self.calculators
    }

    pub fn by_id(&self, id: &str) -> Option<&CalculatorDefinition> {
        self.by_id.get(id).map(|&index| &self.calculators[index])
    }

    /// Like [`Registry::by_id`], but an unknown id is an error
    pub fn get(&self, id: &str) -> Result<&CalculatorDefinition> {
        self.by_id(id).ok_or_else(|| {
            CalcError::registry_for(CALC0100, id, format!("No calculator with id '{}'", id))
        })
    }

    /// Case-insensitive substring match over name, category and tags.
    ///
    /// A blank query returns everything. Order follows [`Registry::all`].
    pub fn search(&self, query: &str) -> Vec<&CalculatorDefinition> {
        let needle = query.trim().to_lowercase();
        self.calculators
            .iter()
            .filter(|def| needle.is_empty() || def.search_haystack().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}

/// Case-insensitive name order; the raw name breaks ties so the order is total
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn validate(def: &CalculatorDefinition, errors: &mut Vec<CalcError>) {
    if def.id.trim().is_empty() {
        errors.push(CalcError::registry(
            CALC0102,
            format!("Calculator '{}' has no id", def.name),
        ));
    }
    if def.name.trim().is_empty() {
        errors.push(CalcError::registry_for(
            CALC0103,
            def.id,
            format!("Calculator '{}' has no name", def.id),
        ));
    }

    let mut keys = HashSet::new();
    for field in def.fields {
        if !keys.insert(field.key) {
            errors.push(CalcError::registry_for(
                CALC0104,
                def.id,
                format!("Field key '{}' appears twice in '{}'", field.key, def.id),
            ));
        }
        if let FieldKind::Select { options, .. } = field.kind {
            if options.is_empty() {
                errors.push(CalcError::registry_for(
                    CALC0105,
                    def.id,
                    format!("Select field '{}' in '{}' has no options", field.key, def.id),
                ));
            }
        }
    }
}
