use econboard_rs::core::projection::{gdp_provinces, gdp_totals, price_periods, price_totals};
use econboard_rs::core::{GdpRecord, PriceRecord};

fn sample_prices() -> Vec<PriceRecord> {
    vec![
        PriceRecord::new("2023-01", 100.0),
        PriceRecord::new("2023-02", 102.0),
        PriceRecord::new("2023-03", 104.5),
    ]
}

fn sample_gdp() -> Vec<GdpRecord> {
    vec![
        GdpRecord::new("Harare", 1800.0),
        GdpRecord::new("Bulawayo", 620.0),
    ]
}

#[test]
fn price_projection_preserves_order_and_alignment() {
    let records = sample_prices();
    let labels = price_periods(&records);
    let values = price_totals(&records);

    assert_eq!(labels.len(), records.len());
    assert_eq!(values.len(), records.len());
    for (i, record) in records.iter().enumerate() {
        assert_eq!(labels[i], record.period);
        assert_eq!(values[i], record.total);
    }
}

#[test]
fn gdp_projection_preserves_order_and_alignment() {
    let records = sample_gdp();
    let labels = gdp_provinces(&records);
    let values = gdp_totals(&records);

    assert_eq!(labels, vec!["Harare".to_owned(), "Bulawayo".to_owned()]);
    assert_eq!(values, vec![1800.0, 620.0]);
}

#[test]
fn projection_is_idempotent() {
    let records = sample_prices();

    assert_eq!(price_periods(&records), price_periods(&records));
    assert_eq!(price_totals(&records), price_totals(&records));

    let gdp = sample_gdp();
    assert_eq!(gdp_provinces(&gdp), gdp_provinces(&gdp));
    assert_eq!(gdp_totals(&gdp), gdp_totals(&gdp));
}

#[test]
fn empty_collections_project_to_empty_vectors() {
    assert!(price_periods(&[]).is_empty());
    assert!(price_totals(&[]).is_empty());
    assert!(gdp_provinces(&[]).is_empty());
    assert!(gdp_totals(&[]).is_empty());
}
