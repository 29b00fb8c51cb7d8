use super::*;

#[test]
fn validate_requires_a_variety() {
    let form = SeedBatchForm::default();
    assert_eq!(form.validate(), Err("Select a plant variety.".to_owned()));
}

#[test]
fn validate_accepts_variety_only() {
    let form = SeedBatchForm {
        plant_variety_id: "v-1".to_owned(),
        ..SeedBatchForm::default()
    };
    let payload = form.validate().unwrap();
    assert_eq!(payload.plant_variety_id, "v-1");
    assert_eq!(payload.source, None);
    assert_eq!(payload.harvest_year, None);
    assert_eq!(payload.quantity, None);
}

#[test]
fn validate_parses_numeric_fields() {
    let form = SeedBatchForm {
        plant_variety_id: "v-1".to_owned(),
        source: "saved from last season".to_owned(),
        harvest_year: "2025".to_owned(),
        quantity: "40".to_owned(),
        ..SeedBatchForm::default()
    };
    let payload = form.validate().unwrap();
    assert_eq!(payload.source.as_deref(), Some("saved from last season"));
    assert_eq!(payload.harvest_year, Some(2025));
    assert_eq!(payload.quantity, Some(40));
}

#[test]
fn validate_rejects_non_numeric_harvest_year() {
    let form = SeedBatchForm {
        plant_variety_id: "v-1".to_owned(),
        harvest_year: "last year".to_owned(),
        ..SeedBatchForm::default()
    };
    assert_eq!(
        form.validate(),
        Err("Harvest year must be a whole number.".to_owned())
    );
}

#[test]
fn validate_rejects_non_numeric_quantity() {
    let form = SeedBatchForm {
        plant_variety_id: "v-1".to_owned(),
        quantity: "a handful".to_owned(),
        ..SeedBatchForm::default()
    };
    assert_eq!(
        form.validate(),
        Err("Quantity must be a positive whole number.".to_owned())
    );
}

#[test]
fn validate_rejects_zero_quantity() {
    let form = SeedBatchForm {
        plant_variety_id: "v-1".to_owned(),
        quantity: "0".to_owned(),
        ..SeedBatchForm::default()
    };
    assert_eq!(form.validate(), Err("Quantity must be at least 1.".to_owned()));
}

#[test]
fn validate_treats_whitespace_numeric_fields_as_absent() {
    let form = SeedBatchForm {
        plant_variety_id: " v-1 ".to_owned(),
        harvest_year: "  ".to_owned(),
        quantity: " ".to_owned(),
        ..SeedBatchForm::default()
    };
    let payload = form.validate().unwrap();
    assert_eq!(payload.plant_variety_id, "v-1");
    assert_eq!(payload.harvest_year, None);
    assert_eq!(payload.quantity, None);
}
