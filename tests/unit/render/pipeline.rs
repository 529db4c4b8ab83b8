use super::*;
use crate::params::model::FillMode;
use crate::shape::coverage::ShapeMode;

fn small() -> PlateParams {
    PlateParams {
        size: 32,
        ..PlateParams::default()
    }
}

#[test]
fn grid_has_requested_size() {
    let g = generate(small());
    assert_eq!(g.size(), 32);
    assert_eq!(g.pixels().len(), 32 * 32);
}

#[test]
fn size_is_clamped_before_allocation() {
    let g = generate(PlateParams {
        size: 3,
        ..PlateParams::default()
    });
    assert_eq!(g.size(), 16);
}

#[test]
fn parallel_matches_sequential() {
    let mut p = small();
    p.fill.mode = FillMode::Gradient;
    p.vignette = 0.4;
    p.lift.amount = 0.3;
    let seq = generate(p.clone());
    let par = generate_with(
        p,
        &RenderThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq.digest(), par.digest());
}

#[test]
fn zero_threads_is_rejected() {
    let err = generate_with(
        small(),
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, PlateError::Validation(_)));
}

#[test]
fn sequential_ignores_thread_count() {
    let g = generate_with(
        small(),
        &RenderThreading {
            parallel: false,
            threads: Some(0),
        },
    )
    .unwrap();
    assert_eq!(g.size(), 32);
}

#[test]
fn full_bleed_grid_is_opaque() {
    let mut p = small();
    p.shape.mode = ShapeMode::FullBleedInnerOutline;
    let g = generate(p);
    assert!(g.pixels().iter().all(|px| px.a == 1.0));
}
