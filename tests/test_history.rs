mod common;

use common::{dark_meter, meter, FakeQuotes, FakeSeries, FakeSheets};

#[tokio::test]
async fn test_history_returns_points_and_units() {
    let meter = meter(
        FakeQuotes::default(),
        FakeSeries::default()
            .with_series("GDP", &[27000.0, 27500.0])
            .with_units("GDP", "Billions of Dollars"),
        FakeSheets::default(),
    );

    let history = meter.history("GDP", None, None).await.unwrap();
    assert_eq!(history.series_id, "GDP");
    assert_eq!(history.units.as_deref(), Some("Billions of Dollars"));
    assert_eq!(history.points.len(), 2);
    assert_eq!(history.points[1].value, 27500.0);
}

#[tokio::test]
async fn test_history_without_units_metadata() {
    let meter = meter(
        FakeQuotes::default(),
        FakeSeries::default().with_series("DGS10", &[4.2]),
        FakeSheets::default(),
    );

    let history = meter.history("DGS10", None, None).await.unwrap();
    assert_eq!(history.units, None);
    assert_eq!(history.points.len(), 1);
}

#[tokio::test]
async fn test_history_propagates_provider_failure() {
    let err = dark_meter().history("GDP", None, None).await.unwrap_err();
    assert!(err.to_string().contains("Provider error"));
}
