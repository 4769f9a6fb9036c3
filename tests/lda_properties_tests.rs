use approx::assert_relative_eq;
use lda_qr::data::model::Matrix;
use lda_qr::data::parser::parse_row;
use lda_qr::lda::ops::{delta, normalize, project};
use lda_qr::lda::{format_float, Pipeline};

// ============================================================================
// Parser
// ============================================================================

#[test]
fn test_parser_keeps_token_count_and_order() {
    let values = [0.5, -1.25, 3.0e-4, 12.0, 1.59e-1];
    let tokens: Vec<String> = values.iter().map(|v| format!("{v:E}")).collect();

    for sep in [" ", ",", ", ", "\t"] {
        let row = parse_row(&tokens.join(sep)).unwrap();
        assert_eq!(row.len(), values.len(), "separator {sep:?}");
        for (got, want) in row.iter().zip(values) {
            assert_relative_eq!(*got, want);
        }
    }
}

#[test]
fn test_parser_reference_line() {
    let row = parse_row("0.028501 1.59E-01 0.026755").unwrap();
    assert_eq!(row, vec![0.028501, 0.159, 0.026755]);
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_sums_to_one() {
    let inputs: [&[f64]; 4] = [
        &[1.0, 1.0],
        &[0.1, 0.2, 0.3, 0.4],
        &[5.0, -2.0, 7.5],
        &[1e-9, 3e-9, 2e-9],
    ];
    for v in inputs {
        let sum: f64 = normalize(v).iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Delta + projection are affine in the sample
// ============================================================================

#[test]
fn test_delta_then_project_is_affine() {
    let weights = Matrix::from(vec![
        vec![0.5, -1.0, 2.0],
        vec![3.0, 0.25, -0.75],
    ]);
    let means = Matrix::from(vec![vec![0.1], vec![-0.4], vec![2.5]]);

    let a = [1.0, 2.0, -3.0];
    let b = [0.5, -4.0, 6.0];
    let sum: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
    let zero = [0.0; 3];

    let f = |v: &[f64]| project(&delta(v, &means).unwrap(), &weights).unwrap();

    // f(a + b) = f(a) + f(b) - f(0)
    let lhs = f(sum.as_slice());
    let (fa, fb, f0) = (f(&a[..]), f(&b[..]), f(&zero[..]));
    for k in 0..lhs.len() {
        assert_relative_eq!(lhs[k], fa[k] + fb[k] - f0[k], epsilon = 1e-12);
    }
}

#[test]
fn test_projection_of_known_values() {
    let weights = Matrix::from(vec![vec![2.0, 0.0], vec![1.0, 1.0]]);
    let means = Matrix::from(vec![vec![0.25], vec![0.25]]);
    // normalized [0.75, 0.25] → centered [0.5, 0.0]
    let centered = delta(&normalize(&[3.0, 1.0]), &means).unwrap();
    let projected = project(&centered, &weights).unwrap();
    assert_relative_eq!(projected[0], 1.0);
    assert_relative_eq!(projected[1], 0.5);
}

// ============================================================================
// Formatter
// ============================================================================

#[test]
fn test_format_round_trip_within_precision() {
    let values = [0.0, 1.0, -1.0, 0.333333333, 48.26724806, -24.28220614, 1e-7, 12345.678901];
    for x in values {
        for p in 0..=8 {
            let s = format_float(x, p);
            let back: f64 = s.parse().unwrap();
            assert!(
                (back - x).abs() <= 10f64.powi(-p),
                "{x} at {p} digits rendered as {s}"
            );
        }
    }
}

#[test]
fn test_format_has_no_trailing_zeros() {
    for x in [1.5, 2.0, 0.1, 100.0, -3.25, 0.0] {
        for p in [-1, 1, 3, 6] {
            let s = format_float(x, p);
            assert!(!s.is_empty());
            if s.contains('.') {
                assert!(!s.ends_with('0'), "{s}");
            }
            assert!(!s.ends_with('.'), "{s}");
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_identity_scenario() {
    let scalings = Matrix::from(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    let means = Matrix::from(vec![vec![0.0], vec![0.0]]);
    let samples = Matrix::from(vec![vec![4.0, 0.0]]);

    let pipeline = Pipeline::new(&samples, &scalings, &means, 2, 2).unwrap();
    let projected = pipeline.project_sample(0).unwrap();
    assert_relative_eq!(projected[0], 1.0);
    assert_relative_eq!(projected[1], 0.0);
    assert_eq!(pipeline.run_sample(0).unwrap(), vec!["1", "0"]);
}
