//! Shared severity scales
//!
//! One table per metric. A metric that appears in several calculators (CO,
//! CI, CPO, SVR) is classified with the same table everywhere.

use octofhir_calc_types::{Band, Severity, SeverityScale};

use Severity::{Borderline, Critical, High};

/// Mean arterial pressure, mmHg
pub const MAP: SeverityScale = SeverityScale::new(&[
    Band::below(60.0, Critical),
    Band::below(65.0, High),
    Band::below(70.0, Borderline),
]);

/// Body mass index, kg/m²
pub const BMI: SeverityScale = SeverityScale::new(&[
    Band::at_least(40.0, Critical),
    Band::at_least(30.0, High),
    Band::at_least(25.0, Borderline),
]);

pub const SHOCK_INDEX: SeverityScale = SeverityScale::new(&[
    Band::at_least(1.0, Critical),
    Band::at_least(0.9, High),
    Band::at_least(0.7, Borderline),
]);

/// Pulmonary vascular resistance, Wood units
pub const PVR: SeverityScale = SeverityScale::new(&[
    Band::at_least(5.0, Critical),
    Band::at_least(3.0, High),
    Band::at_least(2.0, Borderline),
]);

/// Transpulmonary gradient, mmHg
pub const TPG: SeverityScale = SeverityScale::new(&[Band::above(12.0, High)]);

/// Stroke volume, mL/beat
pub const STROKE_VOLUME: SeverityScale = SeverityScale::new(&[
    Band::below(40.0, Critical),
    Band::below(55.0, High),
    Band::below(60.0, Borderline),
]);

/// Stroke volume index, mL/beat/m²
pub const STROKE_VOLUME_INDEX: SeverityScale = SeverityScale::new(&[
    Band::below(25.0, Critical),
    Band::below(33.0, High),
    Band::below(35.0, Borderline),
]);

/// Systemic vascular resistance, dyn·s·cm⁻⁵. Abnormal in both directions.
pub const SVR: SeverityScale = SeverityScale::new(&[
    Band::below(700.0, High),
    Band::below(800.0, Borderline),
    Band::above(1600.0, High),
    Band::above(1400.0, Borderline),
]);

/// Cardiac output, L/min
pub const CARDIAC_OUTPUT: SeverityScale = SeverityScale::new(&[
    Band::below(2.5, Critical),
    Band::below(3.0, High),
    Band::below(4.0, Borderline),
]);

/// Cardiac index, L/min/m²
pub const CARDIAC_INDEX: SeverityScale = SeverityScale::new(&[
    Band::below(2.0, Critical),
    Band::below(2.2, High),
    Band::below(2.5, Borderline),
]);

/// Cardiac power output, W
pub const CARDIAC_POWER: SeverityScale = SeverityScale::new(&[
    Band::below(0.6, Critical),
    Band::below(0.8, High),
    Band::below(1.0, Borderline),
]);

/// Pulmonary artery pulsatility index
pub const PAPI: SeverityScale = SeverityScale::new(&[
    Band::below(0.9, Critical),
    Band::below(1.5, High),
    Band::below(2.0, Borderline),
]);

/// Arteriovenous oxygen content difference, mL/dL
pub const OXYGEN_CONTENT_DELTA: SeverityScale = SeverityScale::new(&[Band::below(3.0, High)]);

/// Creatinine clearance, mL/min
pub const CREATININE_CLEARANCE: SeverityScale = SeverityScale::new(&[
    Band::below(15.0, Critical),
    Band::below(30.0, High),
    Band::below(60.0, Borderline),
]);

/// CHA₂DS₂-VASc points
pub const CHA2DS2_VASC: SeverityScale = SeverityScale::new(&[
    Band::at_least(4.0, Critical),
    Band::at_least(2.0, High),
    Band::at_least(1.0, Borderline),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_calc_types::Direction;

    #[test]
    fn test_directions() {
        assert_eq!(MAP.direction(), Some(Direction::Falling));
        assert_eq!(BMI.direction(), Some(Direction::Rising));
        assert_eq!(SVR.direction(), Some(Direction::Bidirectional));
        assert_eq!(TPG.direction(), Some(Direction::Rising));
    }

    #[test]
    fn test_tpg_is_strict() {
        assert_eq!(TPG.classify(12.0), Severity::Ok);
        assert_eq!(TPG.classify(13.0), High);
    }

    #[test]
    fn test_svr_edges() {
        assert_eq!(SVR.classify(699.0), High);
        assert_eq!(SVR.classify(700.0), Borderline);
        assert_eq!(SVR.classify(800.0), Severity::Ok);
        assert_eq!(SVR.classify(1400.0), Severity::Ok);
        assert_eq!(SVR.classify(1401.0), Borderline);
        assert_eq!(SVR.classify(1600.0), Borderline);
        assert_eq!(SVR.classify(1601.0), High);
    }

    #[test]
    fn test_cardiac_index_edges() {
        assert_eq!(CARDIAC_INDEX.classify(1.99), Critical);
        assert_eq!(CARDIAC_INDEX.classify(2.0), High);
        assert_eq!(CARDIAC_INDEX.classify(2.2), Borderline);
        assert_eq!(CARDIAC_INDEX.classify(2.48), Borderline);
        assert_eq!(CARDIAC_INDEX.classify(2.5), Severity::Ok);
    }
}
