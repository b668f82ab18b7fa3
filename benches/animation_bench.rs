#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubeview::animation::Animator;
use cubeview::headless::{HeadlessRig, FRAME};
use cubeview::layout::{
    resolve, Constraints, FooterLimits, LayoutState, ResolveInputs, WindowSize,
};
use cubeview::options::AnimationOptions;
use cubeview::util::easing::EasingFunction;
use cubeview::util::frame_timing::ManualClock;
use cubeview::view::ViewAttribute;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn resolve_benchmark(c: &mut Criterion) {
    let previous = LayoutState::initial(false, true)
        .with_pb_available(true)
        .with_scramble_available(true);
    let inputs = ResolveInputs {
        window: WindowSize::new(1280.0, 720.0),
        header_height: 60.0,
        footer_closed_height: 50.0,
        constraints: Constraints {
            soft: 420.0,
            bare: 210.0,
        },
        preferred_footer_height: 300.0,
        theater_mode: false,
        limits: FooterLimits::default(),
    };
    c.bench_function("resolve_layout_state", |b| {
        b.iter(|| black_box(resolve(black_box(&previous), black_box(&inputs))))
    });
}

fn animator_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_update");

    let all = ViewAttribute::ALL;
    for count in [4_usize, 8, all.len()] {
        let keys = &all[..count];
        let clock = ManualClock::new();
        let mut animator: Animator<ViewAttribute> =
            Animator::with_clock(&AnimationOptions::default(), clock.clone());

        group.bench_function(format!("{count}_attributes"), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                for key in keys {
                    animator.animate_attribute(*key, if flip { 1.0 } else { 0.0 });
                }
                black_box(animator.update(clock.advance(FRAME)))
            })
        });
    }
    group.finish();
}

fn view_toggle_benchmark(c: &mut Criterion) {
    let rig = HeadlessRig::new(WindowSize::new(1280.0, 900.0));
    let Ok(mut view) = rig.build_default() else {
        return;
    };
    c.bench_function("toggle_footer_and_settle", |b| {
        b.iter(|| {
            let _ = view.toggle_footer();
            black_box(rig.settle(&mut view))
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    resolve_benchmark,
    animator_update_benchmark,
    view_toggle_benchmark
);
criterion_main!(benches);
