//! Per-frame cost of the rig and its motion models.
#![allow(missing_docs)]

use std::hint::black_box;

use camrig::camera::{motion, CameraRig, Pose, RenderTargetSet, SlotId};
use camrig::input::FrameInput;
use camrig::options::Options;
use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2, Vec3};

fn motion_benchmark(c: &mut Criterion) {
    let pose = Pose::at(Vec3::new(0.0, 0.0, -10.0));
    let _ = c.bench_function("orbit_step", |b| {
        b.iter(|| black_box(motion::orbit(black_box(&pose), Vec3::ZERO, 0.8)));
    });
    let _ = c.bench_function("look_step", |b| {
        b.iter(|| black_box(motion::look(black_box(Quat::IDENTITY), Vec2::new(1.5, -0.5))));
    });
}

fn rig_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rig_update");
    let options = Options::default();

    for slot in SlotId::ALL {
        let mut targets = RenderTargetSet::default();
        let mut rig = CameraRig::new(&options.scene, options.rig.clone(), &mut targets);
        let _ = rig.select_camera(slot);
        while rig.state().is_transitioning() {
            rig.update(0.1, &FrameInput::default(), &mut targets);
        }

        let input = FrameInput {
            zoom_held: true,
            pointer_delta: Vec2::new(0.3, 0.1),
            ..FrameInput::default()
        };
        let _ = group.bench_function(slot.name(), |b| {
            b.iter(|| rig.update(black_box(1.0 / 60.0), &input, &mut targets));
        });
    }
    group.finish();
}

fn transition_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let _ = c.bench_function("full_transition", |b| {
        b.iter(|| {
            let mut targets = RenderTargetSet::default();
            let mut rig = CameraRig::new(&options.scene, options.rig.clone(), &mut targets);
            let _ = rig.select_camera(SlotId::PathFollower);
            while rig.state().is_transitioning() {
                rig.update(1.0 / 60.0, &FrameInput::default(), &mut targets);
            }
            black_box(rig.active_slot())
        });
    });
}

criterion_group!(benches, motion_benchmark, rig_update_benchmark, transition_benchmark);
criterion_main!(benches);
