use ropesim::{
    CreateConfig, ElasticRopeConfig, ElementConfig, Line, Rope, RopeSolver, SolverConfig, Vec, Vec2,
};

const G: f64 = 9.8;

fn gravity() -> SolverConfig<Vec2<f64>> {
    SolverConfig::new().with_gravity(Vec2::new(0.0, -G))
}

/// Ends fixed at (0, 0) and (2, 0), middle node of mass 1 at (1, 0), springs
/// of stiffness 50 and rest length 1.
fn three_node_solver() -> RopeSolver<Vec2<f64>> {
    let line = Line::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0)).unwrap();
    let element = ElementConfig::new(50.0, 1.0, 1.0).with_damping(0.2);
    let rope = Rope::build(&line, &element, &CreateConfig::new().with_multiplier(0.75)).unwrap();
    assert_eq!(rope.num_points(), 3);
    RopeSolver::new(rope, gravity())
}

#[test]
fn three_node_rope_settles() {
    let mut solver = three_node_solver();
    let dt = 1e-3;

    for _ in 0..5000 {
        solver.update(dt).unwrap();
    }
    let tension = solver.tensions()[1];
    assert!(tension > 0.0 && tension.is_finite(), "tension = {}", tension);
    assert!(solver.rope().point(1).pos.y < 0.0);

    // Relative damping of 0.2 on each side decays as e^(-0.2 t); give it
    // 80 simulated seconds.
    for _ in 5000..80_000 {
        solver.update(dt).unwrap();
    }
    let before = solver.rope().point(1).pos;
    solver.update(dt).unwrap();
    let after = solver.rope().point(1).pos;
    assert!(after.distance(before) < 1e-6, "still moving by {}", after.distance(before));

    // Static balance: both springs hold the weight.
    let y = -after.y;
    let length = (1.0 + y * y).sqrt();
    let lift = 2.0 * 50.0 * (length - 1.0) * y / length;
    assert!((lift - G).abs() < 1e-3, "lift = {}", lift);
    assert!((solver.tensions()[1] - 50.0 * (length - 1.0)).abs() < 1e-3);

    // Fixed ends never move but still report tension.
    assert_eq!(solver.rope().point(0).pos, Vec2::new(0.0, 0.0));
    assert_eq!(solver.rope().point(2).pos, Vec2::new(2.0, 0.0));
    assert!(solver.tensions()[0] > 0.0);
    assert!((solver.tensions()[0] - solver.tensions()[2]).abs() < 1e-9);
}

#[test]
fn energy_drift_is_small_without_damping() {
    let line = Line::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)).unwrap();
    let element = ElementConfig::new(100.0, 0.5, 0.1);
    let rope = Rope::build(&line, &element, &CreateConfig::new().with_multiplier(1.1)).unwrap();
    let mut solver = RopeSolver::new(rope, gravity());

    let initial = solver.energy();
    assert!(initial > 0.0);
    for step in 1..=2000 {
        solver.update(1e-3).unwrap();
        if step % 100 == 0 {
            let drift = (solver.energy() - initial).abs() / initial;
            assert!(drift < 0.01, "energy drifted by {:.4}% at step {}", drift * 100.0, step);
        }
    }
}

#[test]
fn symmetric_rope_stays_symmetric() {
    // Nodes at x = 0, 1, 1.75, 2.5, 3.5, mirrored about x = 1.75.
    let line = Line::new(Vec2::new(0.0, 0.0), Vec2::new(3.5, 0.0)).unwrap();
    let element = ElementConfig::new(50.0, 1.0, 0.1).with_damping(0.05);
    let rope = Rope::build(&line, &element, &CreateConfig::new().with_multiplier(0.75)).unwrap();
    let n = rope.num_points();
    assert_eq!(n, 5);
    for i in 0..n {
        assert_eq!(rope.point(i).pos.mirror_x(1.75), rope.point(n - 1 - i).pos);
    }

    let mut solver = RopeSolver::new(rope, gravity());
    solver.rope_mut().point_mut(1).vel = Vec2::new(0.3, 0.2);
    solver.rope_mut().point_mut(3).vel = Vec2::new(-0.3, 0.2);
    solver.rope_mut().point_mut(2).vel = Vec2::new(0.0, -0.5);

    for step in 1..=1000 {
        solver.update(1e-3).unwrap();
        if step % 50 != 0 {
            continue;
        }
        let rope = solver.rope();
        for i in 0..n {
            let p = rope.point(i);
            let q = rope.point(n - 1 - i);
            assert!(p.pos.mirror_x(1.75).distance(q.pos) < 1e-8, "positions differ at node {} step {}", i, step);
            let mirrored_vel = Vec2::new(-p.vel.x, p.vel.y);
            assert!(mirrored_vel.distance(q.vel) < 1e-8, "velocities differ at node {} step {}", i, step);
        }
    }
}

#[test]
fn analytical_references_from_settled_rope() {
    let mut solver = three_node_solver();
    for _ in 0..80_000 {
        solver.update(1e-3).unwrap();
    }

    let sag = solver.sag();
    assert_eq!(solver.span(), 2.0);
    assert!(sag > 0.5 && sag < 0.8, "sag = {}", sag);

    let catenary = solver.catenary_reference().unwrap();
    assert!(catenary.shape_parameter > 0.0);
    let curve = &catenary.curve;
    assert!(curve.y[0].abs() < 1e-12);
    assert!(curve.y[curve.len() - 1].abs() < 1e-12);
    let lowest = curve.min_y().unwrap();
    assert!((lowest + sag).abs() < 0.01 * sag, "lowest = {}, sag = {}", lowest, sag);

    let horizontal = solver.horizontal_tension().unwrap();
    assert!(horizontal > 0.0);
    let cable = ElasticRopeConfig { weight_density: 4.9, cross_section_area: 1e-4, elastic_constant: 1e8 };
    let elastic = solver.elastic_reference(&cable).unwrap();
    assert_eq!(elastic.x[0], 0.0);
    assert!((elastic.x[elastic.len() - 1] - 2.0).abs() < 1e-12);
    assert!(elastic.min_y().unwrap() < 0.0);
}
