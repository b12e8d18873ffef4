use econboard_rs::api::{build_gdp_doughnut_chart, build_gdp_radar_chart, build_price_line_chart};
use econboard_rs::core::projection::{gdp_provinces, gdp_totals, price_periods, price_totals};
use econboard_rs::core::{GdpRecord, PriceRecord};
use econboard_rs::render::{MountPoint, RecordingRenderer};
use proptest::prelude::*;

fn price_records_strategy() -> impl Strategy<Value = Vec<PriceRecord>> {
    prop::collection::vec(
        ("[0-9]{4}-[0-9]{2}", -1_000_000.0f64..1_000_000.0)
            .prop_map(|(period, total)| PriceRecord::new(period, total)),
        0..32,
    )
}

fn gdp_records_strategy() -> impl Strategy<Value = Vec<GdpRecord>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,16}", -1_000_000.0f64..1_000_000.0)
            .prop_map(|(province, total)| GdpRecord::new(province, total)),
        0..32,
    )
}

proptest! {
    #[test]
    fn line_config_upholds_alignment_for_any_input(records in price_records_strategy()) {
        let mut renderer = RecordingRenderer::new();
        let target = MountPoint::new("cpiChart").expect("valid mount id");

        build_price_line_chart(&mut renderer, &records, &target).expect("bind line chart");

        let config = renderer.config_for(&target).expect("config recorded");
        prop_assert!(config.validate().is_ok());
        prop_assert_eq!(config.labels.len(), records.len());
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&config.labels[i], &record.period);
            prop_assert_eq!(config.series[0].values[i], record.total);
        }
    }

    #[test]
    fn gdp_configs_uphold_alignment_for_any_input(records in gdp_records_strategy()) {
        let mut renderer = RecordingRenderer::new();
        let doughnut_target = MountPoint::new("gdpChart").expect("valid mount id");
        let radar_target = MountPoint::new("gdpRadarChart").expect("valid mount id");

        build_gdp_doughnut_chart(&mut renderer, &records, &doughnut_target)
            .expect("bind doughnut chart");
        build_gdp_radar_chart(&mut renderer, &records, &radar_target).expect("bind radar chart");

        for target in [&doughnut_target, &radar_target] {
            let config = renderer.config_for(target).expect("config recorded");
            prop_assert!(config.validate().is_ok());
            for (i, record) in records.iter().enumerate() {
                prop_assert_eq!(&config.labels[i], &record.province);
                prop_assert_eq!(config.series[0].values[i], record.total);
            }
        }
    }

    #[test]
    fn projections_are_pure(
        prices in price_records_strategy(),
        gdp in gdp_records_strategy(),
    ) {
        prop_assert_eq!(price_periods(&prices), price_periods(&prices));
        prop_assert_eq!(price_totals(&prices), price_totals(&prices));
        prop_assert_eq!(gdp_provinces(&gdp), gdp_provinces(&gdp));
        prop_assert_eq!(gdp_totals(&gdp), gdp_totals(&gdp));
    }
}
