use chrono::{Local, TimeZone};
use sentilab_core::{derive, Classification, Observation, SentimentError, SentimentSeries};
use sentilab_render::{render_dashboard, RenderOptions};

fn sample_series() -> SentimentSeries {
    let values = [71u8, 64, 58, 49, 40, 33, 25, 19, 28, 37, 46, 55];
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let ts = Local
                .timestamp_opt(1_760_000_000 - i as i64 * 86_400, 0)
                .single()
                .unwrap();
            Observation::new(ts, v, Classification::from_value(v))
        })
        .collect();
    SentimentSeries::new(observations)
}

#[test]
fn writes_png_with_requested_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dashboard.png");
    let series = sample_series();
    let stats = derive(&series).unwrap();

    render_dashboard(&series, &stats, &RenderOptions::with_size(800, 480), &path).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (800, 480));
}

#[test]
fn unwritable_destination_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();
    let path = blocker.join("dashboard.png");

    let series = sample_series();
    let stats = derive(&series).unwrap();
    let err = render_dashboard(&series, &stats, &RenderOptions::default(), &path).unwrap_err();

    assert!(matches!(err, SentimentError::Storage(_)), "got {err:?}");
    assert_eq!(err.kind(), "StorageError");
}
