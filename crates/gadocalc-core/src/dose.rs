use gadocalc_formulary::STANDARD_DOSE_MMOL_PER_KG;

use crate::error::DoseError;

/// Volume in mL at the standard 0.1 mmol/kg dose.
pub fn calc_volume(weight_kg: f64, concentration_mmol_ml: f64) -> Result<f64, DoseError> {
    calc_volume_with_dose(weight_kg, concentration_mmol_ml, STANDARD_DOSE_MMOL_PER_KG)
}

/// `volume (mL) = dose (mmol/kg) × weight (kg) / concentration (mmol/mL)`,
/// rounded to one decimal place.
///
/// Rounding is half away from zero (`f64::round` on the value scaled by
/// ten), so 2.25 becomes 2.3. Ties are not realistic for measured weights;
/// the rule is fixed so results stay reproducible.
///
/// Every argument must be strictly positive and the weight finite. NaN is
/// rejected. A result that rounds to 0.0 mL is an error, so any `Ok` volume
/// is greater than zero.
pub fn calc_volume_with_dose(
    weight_kg: f64,
    concentration_mmol_ml: f64,
    dose_mmol_per_kg: f64,
) -> Result<f64, DoseError> {
    if !(weight_kg > 0.0) {
        return Err(DoseError::NonPositiveWeight(weight_kg));
    }
    if !weight_kg.is_finite() {
        return Err(DoseError::NonFiniteWeight(weight_kg));
    }
    if !(concentration_mmol_ml > 0.0) {
        return Err(DoseError::NonPositiveConcentration(concentration_mmol_ml));
    }
    if !(dose_mmol_per_kg > 0.0) {
        return Err(DoseError::NonPositiveDoseRate(dose_mmol_per_kg));
    }

    let volume = dose_mmol_per_kg * weight_kg / concentration_mmol_ml;
    if !volume.is_finite() {
        return Err(DoseError::NonFiniteVolume);
    }

    let rounded = round_one_decimal(volume);
    if rounded <= 0.0 {
        return Err(DoseError::VolumeBelowResolution(volume));
    }
    Ok(rounded)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
