use ropesim::analytical::{
    catenary_shape, solve_catenary_parameter, solve_catenary_with_samples, solve_elastic_rope_with_samples,
};
use ropesim::{solve_catenary, solve_elastic_rope, ElasticRopeConfig, RopeError};

#[test]
fn catenary_round_trip() {
    let (x0, y0) = (2.0f64, 1.0);
    let catenary = solve_catenary_with_samples(x0, y0, 101).unwrap();
    let a = catenary.shape_parameter;
    let curve = &catenary.curve;

    assert_eq!(curve.x[0], 0.0);
    assert!((curve.x[100] - 2.0 * x0).abs() < 1e-12);
    assert!(curve.y[0].abs() < 1e-4);
    assert!(curve.y[100].abs() < 1e-4);
    assert!((curve.y[50] + y0).abs() < 1e-4, "y(x0) = {}", curve.y[50]);
    assert!((catenary_shape(x0, x0, a) + y0).abs() < 1e-4);
    assert!((curve.min_y().unwrap() + y0).abs() < 1e-4);
}

#[test]
fn catenary_default_sampling() {
    let catenary = solve_catenary(2.0f64, 1.0).unwrap();
    assert_eq!(catenary.curve.len(), ropesim::analytical::DEFAULT_SAMPLES);
    assert_eq!(catenary.curve.y.len(), catenary.curve.x.len());
}

#[test]
fn catenary_parameter_from_known_shape() {
    for &a in &[0.3f64, 1.0, 5.0, 40.0] {
        let x0 = 1.0;
        let sag = a * ((x0 / a).cosh() - 1.0);
        let solved = solve_catenary_parameter(x0, sag).unwrap();
        assert!((solved - a).abs() / a < 1e-6, "expected {}, got {}", a, solved);
    }
}

#[test]
fn catenary_out_of_reach_is_a_convergence_error() {
    // y0/a rounds to zero for every parameter large enough to span 1e6.
    let err = solve_catenary(1e6f64, 1e-6).unwrap_err();
    assert!(matches!(err, RopeError::Convergence { .. }), "{:?}", err);
}

#[test]
fn catenary_rejects_bad_input() {
    assert!(matches!(solve_catenary(0.0f64, 1.0), Err(RopeError::InvalidConfiguration(_))));
    assert!(matches!(solve_catenary(2.0f64, -1.0), Err(RopeError::InvalidConfiguration(_))));
}

#[test]
fn stiff_elastic_rope_matches_catenary() {
    let (tension, weight, gap) = (2.0f64, 1.0, 4.0);
    let a = tension / weight;
    let cable = ElasticRopeConfig { weight_density: weight, cross_section_area: 1e-4, elastic_constant: 1e12 };
    let elastic = solve_elastic_rope_with_samples(tension, gap, &cable, 1001).unwrap();

    let sag = a * ((gap / 2.0 / a).cosh() - 1.0);
    let rigid = solve_catenary_with_samples(gap / 2.0, sag, 1001).unwrap();
    assert!((rigid.shape_parameter - a).abs() < 1e-6);

    for i in 0..elastic.len() {
        assert!((elastic.x[i] - rigid.curve.x[i]).abs() < 1e-12);
        assert!(
            (elastic.y[i] - rigid.curve.y[i]).abs() < 1e-4,
            "sample {}: elastic {} vs rigid {}",
            i,
            elastic.y[i],
            rigid.curve.y[i],
        );
    }
}

#[test]
fn elastic_rope_is_symmetric() {
    let curve = solve_elastic_rope(3.0f64, 2.0, 1.5, 1e-4, 2e4).unwrap();
    let n = curve.len();
    assert_eq!(curve.y[0], 0.0);
    assert!(curve.y[n - 1].abs() < 1e-8);
    for i in 0..n {
        assert!((curve.y[i] - curve.y[n - 1 - i]).abs() < 1e-8);
    }
    assert!(curve.min_y().unwrap() < 0.0);
}

#[test]
fn softer_rope_has_shallower_slopes() {
    let stiff = solve_elastic_rope(3.0f64, 2.0, 1.5, 1e-4, 1e12).unwrap();
    let soft = solve_elastic_rope(3.0f64, 2.0, 1.5, 1e-4, 1e4).unwrap();
    let depth = |c: &ropesim::SampledCurve<f64>| -c.min_y().unwrap();
    assert!(depth(&soft) < depth(&stiff));
}

#[test]
fn elastic_rope_rejects_bad_input() {
    assert!(matches!(
        solve_elastic_rope(0.0f64, 2.0, 1.5, 1e-4, 1e4),
        Err(RopeError::InvalidConfiguration(_)),
    ));
    assert!(matches!(
        solve_elastic_rope(1.0f64, 2.0, 1.5, 0.0, 1e4),
        Err(RopeError::InvalidConfiguration(_)),
    ));
}
