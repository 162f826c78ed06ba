use crate::domain::model::{
    CalculationInput, CalculationOutcome, InputError, MAX_GPA, MIN_GPA, TOTAL_SEMESTERS,
};

/// Computes the minimum GPA needed in each remaining semester.
///
/// Checks run in a fixed order and the first failure wins:
/// non-finite numbers, CGPA range, target below current, then semester range.
/// Classification uses the unrounded requirement so display rounding can
/// never move a value across the `0` or `MAX_GPA` boundary.
pub fn compute(current_semester: i64, current_cgpa: f64, target_cgpa: f64) -> CalculationOutcome {
    CalculationInput {
        current_semester,
        current_cgpa,
        target_cgpa,
    }
    .compute()
}

/// Parses the three raw fields of a submission and computes the outcome.
pub fn evaluate(semester: &str, current_cgpa: &str, target_cgpa: &str) -> CalculationOutcome {
    match parse_submission(semester, current_cgpa, target_cgpa) {
        Ok(input) => input.compute(),
        Err(e) => CalculationOutcome::InvalidInput(e),
    }
}

/// Turns raw text fields into numbers. Any field that does not parse
/// (including empty ones and `NaN`/`inf`) rejects the whole submission.
pub fn parse_submission(
    semester: &str,
    current_cgpa: &str,
    target_cgpa: &str,
) -> Result<CalculationInput, InputError> {
    let current_semester = semester
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber)?;

    Ok(CalculationInput {
        current_semester,
        current_cgpa: parse_cgpa(current_cgpa)?,
        target_cgpa: parse_cgpa(target_cgpa)?,
    })
}

fn parse_cgpa(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber),
    }
}

/// `(target * 8 - current * semester) / (8 - semester)`, with no validation.
pub fn required_gpa(current_semester: i64, current_cgpa: f64, target_cgpa: f64) -> f64 {
    let total = TOTAL_SEMESTERS as f64;
    let done = current_semester as f64;
    (target_cgpa * total - current_cgpa * done) / (total - done)
}

/// Maps an unrounded requirement onto an outcome.
pub fn classify(required: f64) -> CalculationOutcome {
    if required > MAX_GPA {
        CalculationOutcome::Impossible(required)
    } else if required <= 0.0 {
        CalculationOutcome::AlreadyAchieved
    } else {
        CalculationOutcome::RequiredGpa(required)
    }
}

/// Rounds for display only.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

impl CalculationInput {
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.current_cgpa.is_finite() || !self.target_cgpa.is_finite() {
            return Err(InputError::NotANumber);
        }

        let cgpa_range = MIN_GPA..=MAX_GPA;
        if !cgpa_range.contains(&self.current_cgpa) || !cgpa_range.contains(&self.target_cgpa) {
            return Err(InputError::CgpaOutOfRange);
        }

        if self.target_cgpa < self.current_cgpa {
            return Err(InputError::TargetBelowCurrent);
        }

        // semester 8 would divide by zero
        if !(1..TOTAL_SEMESTERS).contains(&self.current_semester) {
            return Err(InputError::SemesterOutOfRange);
        }

        Ok(())
    }

    pub fn compute(&self) -> CalculationOutcome {
        if let Err(e) = self.validate() {
            tracing::debug!("Rejected submission {:?}: {}", self, e);
            return CalculationOutcome::InvalidInput(e);
        }

        let required = required_gpa(self.current_semester, self.current_cgpa, self.target_cgpa);
        tracing::debug!("Required GPA for {:?}: {}", self, required);
        classify(required)
    }

    pub fn remaining_semesters(&self) -> i64 {
        TOTAL_SEMESTERS - self.current_semester
    }
}
