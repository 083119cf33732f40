//! Localized display formatting. Display output follows the configured
//! locale; the JSON and storage channels never localize.

use carbonated_core::{Carbonator, CarbonatorBuilder, Environment, Handled, Overrides};
use chrono::Locale;

mod common;

use common::ExampleModel;

fn create_localized_carbonator(locale: Locale, format: &str) -> Carbonator {
    CarbonatorBuilder::new()
        .with_timestamps(["completed_at"])
        .with_environment(Environment::new().with_localization(locale))
        .with_overrides(Overrides {
            display_timestamp_format: Some(format.to_string()),
            ..Default::default()
        })
        .build()
}

#[test]
fn test_display_weekday_in_german() {
    let carbonator = create_localized_carbonator(Locale::de_DE, "%A");
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let display = carbonator
        .display_value(&model, "completed_at")
        .expect("Failed to read display value");
    assert_eq!(display, Handled::Value(Some("Sonntag".to_string())));
}

#[test]
fn test_display_full_date_in_german() {
    let carbonator = create_localized_carbonator(Locale::de_DE, "%A, %d %B %Y");
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let display = carbonator
        .display_value(&model, "completed_at")
        .expect("Failed to read display value");
    assert_eq!(
        display,
        Handled::Value(Some("Sonntag, 01 Januar 2017".to_string()))
    );
}

#[test]
fn test_display_weekday_in_french() {
    let carbonator = create_localized_carbonator(Locale::fr_FR, "%A");
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let display = carbonator
        .display_value(&model, "completed_at")
        .expect("Failed to read display value");
    assert_eq!(display, Handled::Value(Some("dimanche".to_string())));
}

#[test]
fn test_display_full_date_in_french() {
    let carbonator = create_localized_carbonator(Locale::fr_FR, "%A, %d %B %Y");
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let display = carbonator
        .display_value(&model, "completed_at")
        .expect("Failed to read display value");
    assert_eq!(
        display,
        Handled::Value(Some("dimanche, 01 janvier 2017".to_string()))
    );
}

#[test]
fn test_posix_locale_keeps_english_names() {
    let carbonator = create_localized_carbonator(Locale::POSIX, "%A");
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let display = carbonator
        .display_value(&model, "completed_at")
        .expect("Failed to read display value");
    assert_eq!(display, Handled::Value(Some("Sunday".to_string())));
}

#[test]
fn test_localization_does_not_touch_json_channel() {
    let carbonator = CarbonatorBuilder::new()
        .with_timestamps(["completed_at"])
        .with_environment(Environment::new().with_localization(Locale::de_DE))
        .with_overrides(Overrides {
            json_timestamp_format: Some("%A".to_string()),
            ..Default::default()
        })
        .build();
    let model = ExampleModel::new().with("completed_at", "2017-01-01 00:00:00");

    let json = carbonator
        .json_value(&model, "completed_at")
        .expect("Failed to read json value");
    assert_eq!(json, Handled::Value(Some("Sunday".to_string())));
}

#[test]
fn test_localized_display_of_date_fields() {
    let carbonator = CarbonatorBuilder::new()
        .with_dates(["required_by"])
        .with_environment(Environment::new().with_localization(Locale::de_DE))
        .with_overrides(Overrides {
            display_date_format: Some("%A, %d %B %Y".to_string()),
            ..Default::default()
        })
        .build();
    let model = ExampleModel::new().with("required_by", "2017-01-01");

    let display = carbonator
        .display_value(&model, "required_by")
        .expect("Failed to read display value");
    assert_eq!(
        display,
        Handled::Value(Some("Sonntag, 01 Januar 2017".to_string()))
    );
}
