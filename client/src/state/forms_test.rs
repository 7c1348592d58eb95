use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("Имя", "  Анна "), Ok("Анна".to_owned()));
    assert_eq!(required("Имя", "   "), Err(FormError::Missing("Имя")));
}

#[test]
fn bounded_int_parses_within_range() {
    assert_eq!(bounded_int("Гостей", " 3 ", 1, 20), Ok(3));
    assert_eq!(bounded_int("Гостей", "abc", 1, 20), Err(FormError::InvalidNumber("Гостей")));
    assert_eq!(
        bounded_int("Гостей", "21", 1, 20),
        Err(FormError::OutOfRange { field: "Гостей", min: 1, max: 20 })
    );
}

#[test]
fn optional_id_treats_blank_as_none() {
    assert_eq!(optional_id("Домик", ""), Ok(None));
    assert_eq!(optional_id("Домик", "4"), Ok(Some(4)));
    assert_eq!(optional_id("Домик", "x"), Err(FormError::InvalidNumber("Домик")));
}

#[test]
fn form_errors_render_field_labels() {
    assert_eq!(FormError::Missing("Телефон").to_string(), "заполните поле «Телефон»");
    assert_eq!(
        FormError::OutOfRange { field: "Гостей", min: 1, max: 20 }.to_string(),
        "значение поля «Гостей» должно быть от 1 до 20"
    );
}
