use gadocalc_core::evaluator::{
    ALLERGY_WARNING, INVALID_AGE_MESSAGE, INVALID_WEIGHT_MESSAGE, PEDIATRIC_DOSE_WARNING,
    PEDIATRIC_RESTRICTION_WARNING, RENAL_WARNING, UNKNOWN_AGENT_MESSAGE,
    VOLUME_BELOW_RESOLUTION_MESSAGE,
};
use gadocalc_core::{BlockReason, Evaluation, PatientInput, evaluate};

fn patient(age: u32, weight_kg: f64, agent: &str) -> PatientInput {
    PatientInput::for_agent("Test Patient", age, weight_kg, agent)
}

#[test]
fn pediatric_dotarem_scenario() {
    let result = evaluate(&patient(5, 20.0, "Dotarem"));

    assert!(result.is_ok());
    assert_eq!(result.volume_ml(), Some(4.0));
    assert_eq!(result.warnings(), [PEDIATRIC_DOSE_WARNING]);
    assert_eq!(
        result.messages(),
        ["volume (mL) = (0.1 mmol/kg × 20.0 kg) / 0.500 mmol/mL"]
    );
}

#[test]
fn adult_gadovist_scenario() {
    let result = evaluate(&patient(40, 70.0, "Gadovist"));

    assert!(result.is_ok());
    assert_eq!(result.volume_ml(), Some(7.0));
    assert!(result.warnings().is_empty());
    assert_eq!(
        result.messages(),
        ["volume (mL) = (0.1 mmol/kg × 70.0 kg) / 1.000 mmol/mL"]
    );
}

#[test]
fn pediatric_omniscan_is_blocked() {
    let result = evaluate(&patient(8, 25.0, "Omniscan"));

    assert!(!result.is_ok());
    assert_eq!(result.volume_ml(), None);
    assert_eq!(result.block_reason(), Some(BlockReason::PediatricRestriction));
    assert_eq!(result.warnings(), [PEDIATRIC_RESTRICTION_WARNING]);
    assert!(result.messages().is_empty());
}

#[test]
fn adult_omniscan_is_allowed() {
    let result = evaluate(&patient(13, 50.0, "Omniscan"));
    assert_eq!(result.volume_ml(), Some(10.0));
    assert!(result.warnings().is_empty());
}

#[test]
fn renal_impairment_blocks_every_agent() {
    for agent in ["Dotarem", "Omniscan", "Prohance", "Gadovist", "Gadavist", "Unknown"] {
        for age in [3, 40] {
            let input = patient(age, 60.0, agent).with_renal_impairment(true);
            let result = evaluate(&input);

            assert_eq!(
                result.block_reason(),
                Some(BlockReason::RenalContraindication),
                "{agent} age {age}"
            );
            assert_eq!(result.volume_ml(), None);
            assert_eq!(result.warnings(), [RENAL_WARNING]);
            assert!(result.messages().is_empty());
        }
    }
}

#[test]
fn age_and_weight_checks_run_before_renal_check() {
    let zero_age = patient(0, 60.0, "Dotarem").with_renal_impairment(true);
    assert_eq!(evaluate(&zero_age).block_reason(), Some(BlockReason::InvalidAge));

    let zero_weight = patient(40, 0.0, "Dotarem").with_renal_impairment(true);
    assert_eq!(
        evaluate(&zero_weight).block_reason(),
        Some(BlockReason::InvalidWeight)
    );
}

#[test]
fn zero_age_is_rejected_before_pediatric_classification() {
    let result = evaluate(&patient(0, 4.0, "Omniscan"));

    assert_eq!(result.block_reason(), Some(BlockReason::InvalidAge));
    assert_eq!(result.messages(), [INVALID_AGE_MESSAGE]);
    assert!(result.warnings().is_empty());
    assert_eq!(result.volume_ml(), None);
}

#[test]
fn non_positive_weight_is_rejected() {
    for weight in [0.0, -12.0, f64::NAN] {
        let result = evaluate(&patient(30, weight, "Dotarem"));
        assert_eq!(result.block_reason(), Some(BlockReason::InvalidWeight));
        assert_eq!(result.messages(), [INVALID_WEIGHT_MESSAGE]);
        assert_eq!(result.volume_ml(), None);
    }
}

#[test]
fn infinite_weight_is_rejected() {
    let result = evaluate(&patient(30, f64::INFINITY, "Dotarem"));
    assert_eq!(result.block_reason(), Some(BlockReason::InvalidWeight));
    assert_eq!(result.messages(), [INVALID_WEIGHT_MESSAGE]);
    assert_eq!(result.volume_ml(), None);
}

#[test]
fn tiny_patient_volume_is_blocked_not_zero() {
    let result = evaluate(&patient(1, 0.4, "Gadovist"));

    assert!(!result.is_ok());
    assert_eq!(result.volume_ml(), None);
    assert_eq!(
        result.block_reason(),
        Some(BlockReason::VolumeBelowResolution)
    );
    assert_eq!(result.messages(), [VOLUME_BELOW_RESOLUTION_MESSAGE]);
    assert!(result.warnings().is_empty());
}

#[test]
fn computed_volume_is_always_positive() {
    for weight in [0.6, 1.0, 2.5, 9.9, 45.0, 150.0] {
        for agent in ["Dotarem", "Prohance", "Gadovist"] {
            let result = evaluate(&patient(30, weight, agent));
            if let Some(volume) = result.volume_ml() {
                assert!(volume > 0.0, "{agent} {weight} kg");
            } else {
                assert_eq!(
                    result.block_reason(),
                    Some(BlockReason::VolumeBelowResolution)
                );
            }
        }
    }
}

#[test]
fn unknown_agent_is_rejected() {
    let mut input = patient(30, 70.0, "Magnevist").with_prior_allergy(true);
    input.concentration_mmol_ml = 0.5;
    let result = evaluate(&input);

    assert_eq!(result.block_reason(), Some(BlockReason::UnknownAgent));
    assert_eq!(result.messages(), [UNKNOWN_AGENT_MESSAGE]);
    assert!(result.warnings().is_empty());
    assert_eq!(result.volume_ml(), None);
}

#[test]
fn allergy_warning_follows_pediatric_warning() {
    let input = patient(6, 22.0, "Prohance").with_prior_allergy(true);
    let result = evaluate(&input);

    assert_eq!(result.volume_ml(), Some(4.4));
    assert_eq!(result.warnings(), [PEDIATRIC_DOSE_WARNING, ALLERGY_WARNING]);
}

#[test]
fn adult_allergy_warning_only() {
    let input = patient(55, 80.0, "Gadavist").with_prior_allergy(true);
    let result = evaluate(&input);

    assert_eq!(result.volume_ml(), Some(8.0));
    assert_eq!(result.warnings(), [ALLERGY_WARNING]);
}

#[test]
fn study_and_technique_do_not_affect_outcome() {
    let plain = evaluate(&patient(40, 70.0, "Gadovist"));
    let described =
        evaluate(&patient(40, 70.0, "Gadovist").with_study("brain MRI", "T1 post-contrast"));
    assert_eq!(plain, described);
}

#[test]
fn formulary_concentration_wins_over_supplied_value() {
    let mut input = patient(40, 70.0, "Gadovist");
    input.concentration_mmol_ml = 0.5;
    let result = evaluate(&input);

    assert_eq!(result.volume_ml(), Some(7.0));
    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].contains("does not match the formulary value"));
    assert!(result.warnings()[0].contains("Gadovist"));
}

#[test]
fn non_positive_supplied_concentration_cannot_fault() {
    let mut input = patient(40, 70.0, "Dotarem");
    input.concentration_mmol_ml = 0.0;
    let result = evaluate(&input);

    assert_eq!(result.volume_ml(), Some(14.0));
    assert_eq!(result.warnings().len(), 1);
}

#[test]
fn evaluation_is_deterministic() {
    let input = patient(9, 31.4, "Dotarem").with_prior_allergy(true);
    assert_eq!(evaluate(&input), evaluate(&input));
}

#[test]
fn computed_result_serializes_with_status_tag() {
    let result = evaluate(&patient(40, 70.0, "Gadovist"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "computed");
    assert_eq!(json["volume_ml"], 7.0);
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn blocked_result_serializes_reason() {
    let result = evaluate(&patient(8, 25.0, "Omniscan"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "blocked");
    assert_eq!(json["reason"], "pediatric_restriction");
    assert!(json.get("volume_ml").is_none());

    let back: Evaluation = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn patient_input_defaults_optional_fields() {
    let input: PatientInput = serde_json::from_str(
        r#"{
            "full_name": "Ana Perez",
            "age": 40,
            "weight_kg": 70.0,
            "agent": "Gadovist",
            "concentration_mmol_ml": 1.0
        }"#,
    )
    .unwrap();

    assert_eq!(input.study_type, None);
    assert!(!input.significant_renal_impairment);
    assert!(!input.prior_allergic_reaction);
    assert_eq!(evaluate(&input).volume_ml(), Some(7.0));
}
