use futures::executor::block_on;

use super::*;
use crate::net::api::ApiClient;
use crate::net::testing::RecordingTransport;

fn filled() -> HouseForm {
    HouseForm {
        name: "Кедр".to_owned(),
        slug: "kedr".to_owned(),
        capacity: "6".to_owned(),
        base_price: "7500".to_owned(),
        short_description: "Сауна и камин".to_owned(),
    }
}

#[test]
fn house_form_defaults() {
    let form = HouseForm::default();
    assert_eq!(form.capacity, "4");
    assert_eq!(form.base_price, "0");
}

#[test]
fn payload_coerces_capacity_and_price() {
    let payload = filled().to_payload().unwrap();
    assert_eq!(payload.capacity, 6);
    assert_eq!(payload.base_price, 7500);
}

#[test]
fn payload_rejects_negative_price() {
    let form = HouseForm { base_price: "-1".to_owned(), ..filled() };
    assert!(matches!(form.to_payload(), Err(FormError::OutOfRange { field: "Цена", .. })));
}

#[test]
fn successful_create_resets_form() {
    let api = ApiClient::new("http://api.test", RecordingTransport::new().respond(200, r#"{"id":1}"#));
    let mut s = HouseFormState { form: filled(), ..HouseFormState::default() };

    let payload = s.begin_submit().unwrap();
    let result = block_on(api.create_house(&payload));
    s.finish_submit(&result);

    assert_eq!(api.transport().body_json(0)["capacity"], serde_json::json!(6));
    assert_eq!(api.transport().requests()[0].url, "http://api.test/admin/houses");
    assert_eq!(s.form, HouseForm::default());
    assert!(s.error.is_none());
    assert!(!s.submitting);
}

#[test]
fn rejected_create_keeps_inputs_and_shows_detail() {
    let api = ApiClient::new(
        "http://api.test",
        RecordingTransport::new().respond(400, r#"{"detail":"Slug already exists"}"#),
    );
    let mut s = HouseFormState { form: filled(), ..HouseFormState::default() };

    let payload = s.begin_submit().unwrap();
    let result = block_on(api.create_house(&payload));
    s.finish_submit(&result);

    assert_eq!(s.form, filled());
    assert_eq!(s.error.as_deref(), Some("Slug already exists"));
}

#[test]
fn invalid_form_records_error_without_submitting() {
    let mut s = HouseFormState { form: HouseForm { name: String::new(), ..filled() }, ..HouseFormState::default() };
    assert!(s.begin_submit().is_none());
    assert!(!s.submitting);
    assert_eq!(s.error.as_deref(), Some("заполните поле «Название»"));
}
