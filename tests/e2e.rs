mod common;

use common::synthetic_image::{
    diagonal_stripe_u8, flat_u8, gray_to_rgb, square_grid_u8, squares_u8,
};
use doc_quality::blur::BlurReport;
use doc_quality::prelude::*;
use doc_quality::{EdgeExtractor, NO_EVIDENCE_ANGLE};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blur_report(size: usize, data: &[u8]) -> BlurReport {
    BlurScorer::default()
        .score_detailed(&RasterImage::gray(size, size, data))
        .expect("valid raster")
}

#[test]
fn black_page_is_blurry_without_angle() {
    init_logger();
    let data = flat_u8(100, 100, 0);
    let assessor = QualityAssessor::new(QualityParams::default());
    let result = assessor
        .assess(&RasterImage::gray(100, 100, &data))
        .expect("valid raster");

    assert_eq!(result.detected_blur, 0.0);
    assert_eq!(result.blur_label, BlurLabel::Blur);
    assert_eq!(result.detected_angle, NO_EVIDENCE_ANGLE);
}

#[test]
fn diagonal_stripe_reports_forty_five_degrees() {
    init_logger();
    let data = diagonal_stripe_u8(200, 20, 180, 2);
    let report = LineAngleEstimator::default()
        .estimate_detailed(&RasterImage::gray(200, 200, &data))
        .expect("valid raster");

    assert!(!report.segments.is_empty());
    assert!(
        (report.assessment.angle - 45.0).abs() <= 0.5,
        "angle {:.2} from {:?}",
        report.assessment.angle,
        report.segments
    );
}

#[test]
fn few_sharp_regions_still_count_as_blur() {
    init_logger();
    let data = squares_u8(200, &[(30, 30), (130, 30), (30, 130), (130, 130)], 40);
    let report = blur_report(200, &data);

    assert!(
        report.assessment.score > 300.0,
        "score {:.1}",
        report.assessment.score
    );
    assert_eq!(report.box_count, Some(4));
    assert_eq!(report.assessment.label, BlurLabel::Blur);
}

#[test]
fn many_sharp_regions_are_clear() {
    init_logger();
    let data = square_grid_u8(200, 4, 4, 20, 40, 20);
    let report = blur_report(200, &data);

    assert!(report.assessment.score > 300.0);
    assert_eq!(report.box_count, Some(16));
    assert_eq!(report.assessment.label, BlurLabel::Clear);
}

#[test]
fn box_count_cutoff_is_configurable() {
    let data = square_grid_u8(200, 4, 4, 20, 40, 20);
    let mut params = QualityParams::default();
    params.blur.max_blurry_box_count = 16;
    let result = QualityAssessor::new(params)
        .assess(&RasterImage::gray(200, 200, &data))
        .expect("valid raster");
    assert_eq!(result.blur_label, BlurLabel::Blur);
}

#[test]
fn outputs_stay_in_range() {
    init_logger();
    let assessor = QualityAssessor::new(QualityParams::default());
    let images = [
        flat_u8(64, 64, 200),
        diagonal_stripe_u8(64, 0, 63, 3),
        square_grid_u8(64, 3, 3, 10, 20, 5),
        squares_u8(64, &[(0, 0)], 64),
    ];
    for data in &images {
        let result = assessor
            .assess(&RasterImage::gray(64, 64, data))
            .expect("valid raster");
        assert!(result.detected_blur >= 0.0);
        assert!(
            (0.0..180.0).contains(&result.detected_angle),
            "angle {}",
            result.detected_angle
        );
    }
}

#[test]
fn repeated_assessment_is_identical() {
    let data = square_grid_u8(200, 4, 4, 20, 40, 20);
    let raster = RasterImage::gray(200, 200, &data);
    let assessor = QualityAssessor::new(QualityParams::default());

    let first = assessor.assess(&raster).expect("valid raster");
    let second = assessor.assess(&raster).expect("valid raster");
    assert_eq!(first.detected_blur.to_bits(), second.detected_blur.to_bits());
    assert_eq!(first.blur_label, second.blur_label);
    assert_eq!(
        first.detected_angle.to_bits(),
        second.detected_angle.to_bits()
    );
}

#[test]
fn rgb_with_equal_channels_matches_gray() {
    let gray = diagonal_stripe_u8(120, 10, 110, 2);
    let rgb = gray_to_rgb(&gray);
    let assessor = QualityAssessor::new(QualityParams::default());

    let from_gray = assessor
        .assess(&RasterImage::gray(120, 120, &gray))
        .expect("valid raster");
    let from_rgb = assessor
        .assess(&RasterImage::rgb(120, 120, &rgb))
        .expect("valid raster");
    assert_eq!(from_gray, from_rgb);

    let edges = EdgeExtractor::default();
    assert_eq!(
        edges.extract(&RasterImage::gray(120, 120, &gray)).expect("gray"),
        edges.extract(&RasterImage::rgb(120, 120, &rgb)).expect("rgb")
    );
}

#[test]
fn zero_area_image_is_rejected_by_every_metric() {
    let raster = RasterImage::gray(0, 0, &[]);

    let err = QualityAssessor::new(QualityParams::default())
        .assess(&raster)
        .unwrap_err();
    assert!(matches!(err, QualityError::InvalidImage(_)));
    assert!(BlurScorer::default().score(&raster).is_err());
    assert!(LineAngleEstimator::default().estimate(&raster).is_err());
}
