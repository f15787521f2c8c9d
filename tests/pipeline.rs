use histeq_gray::{
    equalize, equalize_image, CumulativeHistogram, EqualizeError, EqualizeParams, Execution,
    Histogram, LEVELS,
};
use more_asserts::{assert_ge, assert_le};
use ndarray::{array, Array2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Dark, low-contrast scene: most pixels crowd into a narrow band.
fn dark_scene(rows: usize, cols: usize) -> Array2<u8> {
    Array2::from_shape_fn((rows, cols), |(y, x)| {
        let base = 20 + ((x * 3 + y * 5) % 35) as u8;
        if (x / 16 + y / 16) % 5 == 0 {
            base + 60
        } else {
            base
        }
    })
}

#[test]
fn histogram_and_cumulative_invariants() {
    init_logging();
    let img = dark_scene(120, 90);
    let eq = equalize(&img.view(), &EqualizeParams::default()).unwrap();
    assert_eq!(eq.histogram.total(), 120 * 90);
    let values = eq.cumulative.values();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values[LEVELS - 1], 120 * 90);
}

#[test]
fn remapped_histogram_matches_final_shape() {
    init_logging();
    let img = dark_scene(200, 150);
    let eq = equalize(&img.view(), &EqualizeParams::default()).unwrap();
    let after = Histogram::from_image(&eq.image.view());
    let n = eq.map.pixel_count() as f64;
    for (level, (&count, &expected)) in after
        .counts()
        .iter()
        .zip(eq.map.equalized_histogram().iter())
        .enumerate()
    {
        let scaled = count as f64 * 255.0 / n;
        assert_le!(
            (scaled - f64::from(expected)).abs(),
            0.5 + 1e-6,
            "level {}: scaled {} vs final {}",
            level,
            scaled,
            expected
        );
    }
}

#[test]
fn equalization_spreads_a_dark_image() {
    init_logging();
    let img = dark_scene(64, 64);
    let out = equalize_image(&img.view()).unwrap();
    let (min_in, max_in) = (img.iter().min().unwrap(), img.iter().max().unwrap());
    let (min_out, max_out) = (out.iter().min().unwrap(), out.iter().max().unwrap());
    assert_eq!(*max_out, 255);
    assert_ge!(max_out - min_out, max_in - min_in);
}

#[test]
fn uniform_image_is_nearly_unchanged() {
    init_logging();
    let img = Array2::from_shape_fn((16, 256), |(_, x)| x as u8);
    let out = equalize_image(&img.view()).unwrap();
    for (&a, &b) in img.iter().zip(out.iter()) {
        assert_le!(a.abs_diff(b), 1);
    }
}

#[test]
fn constant_image_stays_constant() {
    init_logging();
    let img = Array2::from_elem((10, 13), 117u8);
    let eq = equalize(&img.view(), &EqualizeParams::new(Execution::Sequential)).unwrap();
    assert_eq!(eq.histogram.count(117), 130);
    assert_eq!(eq.histogram.counts().iter().filter(|&&c| c > 0).count(), 1);
    let first = eq.image[[0, 0]];
    assert!(eq.image.iter().all(|&v| v == first));
}

#[test]
fn four_pixel_scenario() {
    init_logging();
    let img = array![[0u8, 85], [170, 255]];
    for execution in [Execution::Sequential, Execution::Parallel] {
        let eq = equalize(&img.view(), &EqualizeParams::new(execution)).unwrap();
        assert_eq!(eq.image, array![[64u8, 128], [191, 255]]);
        let cum = CumulativeHistogram::from_histogram(&eq.histogram);
        assert_eq!(cum, eq.cumulative);
    }
}

#[test]
fn empty_images_are_rejected() {
    init_logging();
    for shape in [(0, 0), (0, 4), (4, 0)] {
        let img = Array2::<u8>::zeros(shape);
        assert!(matches!(
            equalize_image(&img.view()),
            Err(EqualizeError::EmptyImage { .. })
        ));
    }
}
