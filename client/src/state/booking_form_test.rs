use futures::executor::block_on;

use super::*;
use crate::net::api::ApiClient;
use crate::net::testing::RecordingTransport;
use crate::net::transport::Method;

fn house(id: i64, name: &str) -> House {
    House {
        id,
        name: name.to_owned(),
        slug: name.to_lowercase(),
        capacity: 4,
        base_price: 6500,
        short_description: String::new(),
    }
}

fn filled_form() -> BookingForm {
    BookingForm {
        house_id: "3".to_owned(),
        guest_name: "Анна".to_owned(),
        guest_phone: "+79990001122".to_owned(),
        guest_comment: "поздний заезд".to_owned(),
        check_in: "2026-07-01".to_owned(),
        check_out: "2026-07-05".to_owned(),
        guests_count: "4".to_owned(),
    }
}

#[test]
fn form_defaults_to_two_guests() {
    let form = BookingForm::default();
    assert_eq!(form.guests_count, "2");
    assert!(form.house_id.is_empty());
}

#[test]
fn catalog_preselects_first_house() {
    let mut s = BookingFormState::default();
    s.catalog_loaded(Ok(vec![house(5, "Кедр"), house(6, "Сосна")]));
    assert_eq!(s.form.house_id, "5");
    assert_eq!(s.catalog, LoadPhase::Loaded);
    assert_eq!(s.houses.len(), 2);
}

#[test]
fn empty_catalog_leaves_house_unselected() {
    let mut s = BookingFormState::default();
    s.catalog_loaded(Ok(Vec::new()));
    assert!(s.form.house_id.is_empty());
}

#[test]
fn catalog_failure_is_reported() {
    let mut s = BookingFormState::default();
    s.catalog_loaded(Err(ApiError::Network("offline".to_owned())));
    assert!(matches!(s.catalog, LoadPhase::Failed(_)));
}

#[test]
fn payload_coerces_numeric_fields() {
    let payload = filled_form().to_payload().unwrap();
    assert_eq!(payload.house_id, Some(3));
    assert_eq!(payload.guests_count, 4);

    let no_house = BookingForm { house_id: String::new(), ..filled_form() };
    assert_eq!(no_house.to_payload().unwrap().house_id, None);
}

#[test]
fn payload_rejects_missing_required_field() {
    let form = BookingForm { guest_phone: " ".to_owned(), ..filled_form() };
    assert_eq!(form.to_payload(), Err(FormError::Missing("Телефон")));
}

#[test]
fn submit_sends_numeric_house_id_and_guests_count() {
    let mut s = BookingFormState { form: filled_form(), ..BookingFormState::default() };
    let api = ApiClient::new("http://api.test", RecordingTransport::new().respond(200, r#"{"id":17}"#));

    let payload = s.begin_submit().unwrap();
    assert!(s.submitting);
    let result = block_on(api.create_booking_request(&payload));
    s.finish_submit(&result);

    assert_eq!(api.transport().methods(), [Method::Post]);
    let body = api.transport().body_json(0);
    assert_eq!(body["house_id"], serde_json::json!(3));
    assert_eq!(body["guests_count"], serde_json::json!(4));
    assert_eq!(body["guest_name"], serde_json::json!("Анна"));
    assert!(!s.submitting);
    assert_eq!(s.result, "✅ Заявка отправлена! Номер: #17");
}

#[test]
fn rejected_submission_shows_backend_detail() {
    let mut s = BookingFormState { form: filled_form(), ..BookingFormState::default() };
    let api = ApiClient::new("http://api.test", RecordingTransport::new().respond(422, r#"{"detail": "X"}"#));

    let payload = s.begin_submit().unwrap();
    let result = block_on(api.create_booking_request(&payload));
    s.finish_submit(&result);

    assert_eq!(s.result, "❌ X");
}

#[test]
fn rejected_submission_without_detail_uses_fallback() {
    let result = Err(ApiError::Status { status: 500, detail: None });
    assert_eq!(submission_message(&result), "❌ Ошибка отправки");
}

#[test]
fn invalid_form_does_not_start_submission() {
    let mut s = BookingFormState {
        form: BookingForm { guests_count: "0".to_owned(), ..filled_form() },
        ..BookingFormState::default()
    };
    assert!(s.begin_submit().is_none());
    assert!(!s.submitting);
    assert_eq!(s.result, "❌ значение поля «Гостей» должно быть от 1 до 20");
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let mut s = BookingFormState { form: filled_form(), ..BookingFormState::default() };
    assert!(s.begin_submit().is_some());
    assert!(s.begin_submit().is_none());
}
