use ropesim::{solve_elastic_rope, CreateConfig, ElementConfig, Line, Rope, RopeSolver, SolverConfig, Vec2};

#[test]
fn rope_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let line = Line::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)).unwrap();
        let element = ElementConfig::new(100.0, 0.2, 0.05).with_damping(0.02);
        let rope = Rope::build(&line, &element, &CreateConfig::new().with_multiplier(1.05)).unwrap();
        let mut solver = RopeSolver::new(rope, SolverConfig::new().with_gravity(Vec2::new(0.0, -9.8)));
        for _ in 0..500 {
            solver.update(1e-3).unwrap();
        }
        (solver.rope().positions(), solver.tensions().to_vec())
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].0.iter().zip(r.0.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
        assert_eq!(results[0].1, r.1);
    }
}

#[test]
fn elastic_rope_deterministic() {
    let results: Vec<_> = (0..5)
        .map(|_| solve_elastic_rope(3.0f64, 4.0, 0.7, 7.85e-5, 1e4).unwrap())
        .collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
