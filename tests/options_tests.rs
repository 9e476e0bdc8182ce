use chrono::NaiveDate;
use ummalqura::{Calendar, CalendarOptions, HijriDate, TableVariant};

#[test]
fn test_default_options() {
    let opts = CalendarOptions::default();
    assert_eq!(opts.variant, TableVariant::UmmAlQura);
    assert!(opts.locale.is_none());
}

#[test]
fn test_builder_methods() {
    let opts = CalendarOptions::default()
        .with_variant(TableVariant::Legacy)
        .with_locale("ar");
    assert_eq!(opts.variant, TableVariant::Legacy);
    assert_eq!(opts.locale.as_deref(), Some("ar"));
}

#[test]
fn test_variant_selects_table() {
    let legacy = Calendar::new(CalendarOptions::default().with_variant(TableVariant::Legacy));
    assert_eq!(legacy.min_year(), 1318);
    assert_eq!(legacy.max_year(), 1500);
    assert!(std::ptr::eq(legacy.table(), TableVariant::Legacy.table()));

    let wide = Calendar::default();
    assert_eq!(wide.min_year(), 1276);
    assert_eq!(TableVariant::UmmAlQura.first_year(), 1276);
}

#[test]
fn test_variants_agree_on_shared_years() {
    let legacy = Calendar::new(CalendarOptions::default().with_variant(TableVariant::Legacy));
    let wide = Calendar::default();
    let instant = NaiveDate::from_ymd_opt(1990, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(legacy.gregorian_to_hijri(instant).unwrap(), HijriDate::new(1410, 6, 4));
    assert_eq!(wide.gregorian_to_hijri(instant).unwrap(), HijriDate::new(1410, 6, 4));
}

#[test]
fn test_locale_option_is_used_by_format() {
    let cal = Calendar::new(CalendarOptions::default().with_locale("ar"));
    assert_eq!(cal.locale().name, "ar");
    let instant = NaiveDate::from_ymd_opt(2019, 7, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(cal.format(instant, "d").unwrap(), "٣٠");
}
