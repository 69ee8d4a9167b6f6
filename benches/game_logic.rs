use criterion::{black_box, criterion_group, criterion_main, Criterion};
use funzone::core::games::{Runner, Snake};
use funzone::core::GameModule;
use funzone::engine::{create_module, GameHost, ModuleOptions};
use funzone::term::{FrameBuffer, GameScreen, Hud, Viewport};
use funzone::types::{Action, GameId, FRAME_MS, SNAKE_STEP_MS};

fn bench_runner_tick(c: &mut Criterion) {
    c.bench_function("runner_tick_16ms", |b| {
        let mut runner = Runner::new(12345);
        runner.start();
        b.iter(|| {
            if runner.is_terminal() {
                runner.start();
            }
            runner.handle_action(Action::Jump);
            let _ = runner.tick(black_box(FRAME_MS));
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    c.bench_function("snake_tick", |b| {
        let mut snake = Snake::new(12345);
        snake.start();
        b.iter(|| {
            if snake.is_terminal() {
                snake.start();
            }
            let _ = snake.tick(black_box(SNAKE_STEP_MS));
        })
    });
}

fn bench_host_frame(c: &mut Criterion) {
    let mut host = GameHost::new(create_module(GameId::GeometryDash, 7, ModuleOptions::default()));
    let _ = host.start();
    let mut fb = FrameBuffer::new(100, 30);

    c.bench_function("host_step_and_render", |b| {
        b.iter(|| {
            if !host.is_running() {
                let _ = host.restart();
            }
            host.step(black_box(FRAME_MS as u64), None);
            GameScreen.render_into(host.snapshot(), &Hud::default(), Viewport::new(100, 30), &mut fb);
        })
    });
}

criterion_group!(benches, bench_runner_tick, bench_snake_tick, bench_host_frame);
criterion_main!(benches);
