use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tick_tock::{DemoEvent, ToggleState, dispatch};

fn event_sequence(len: usize) -> Vec<DemoEvent> {
    (0..len)
        .map(|i| {
            if i % 16 == 15 {
                DemoEvent::ButtonPressed
            } else {
                DemoEvent::TimerTick
            }
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let events = event_sequence(10_000);

    c.bench_function("dispatch_10k_events", |b| {
        b.iter(|| {
            let mut state = ToggleState::default();
            let mut timer_active = true;

            for &event in &events {
                let transition = dispatch(state, timer_active, black_box(event));
                timer_active = transition.timer_active_after(timer_active);
                state = transition.state;
            }

            black_box((state, timer_active))
        });
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
