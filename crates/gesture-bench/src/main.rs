use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;

use timeline_gestures::config::{Axis, GestureOverrides};
use timeline_gestures::engine::GestureEngine;
use timeline_gestures::events::GestureKind;
use timeline_gestures::geometry::{BoundsRect, Point};
use timeline_gestures::pointer::{PointerButton, PointerEvent, PointerEventKind, TouchId};

const ELEMENT_WIDTH: f64 = 36.0;
const ELEMENT_HEIGHT: f64 = 16.0;
const GRID_COLUMNS: u32 = 32;

#[derive(Parser, Debug)]
#[command(
    name = "gesture-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Synthetic press/move/release streams for checking classification throughput"
)]
struct BenchCli {
    /// Number of complete press-to-release sessions to synthesize.
    #[arg(
        short = 's',
        long = "sessions",
        value_name = "COUNT",
        default_value_t = 100_000
    )]
    sessions: u64,

    /// Number of elements registered on the synthetic timeline.
    #[arg(
        short = 'e',
        long = "elements",
        value_name = "COUNT",
        default_value_t = 64
    )]
    elements: u32,

    /// Seed for the deterministic session generator, so runs are repeatable.
    #[arg(long = "seed", value_name = "SEED", default_value_t = 0x5eed_2bad_cafe)]
    seed: u64,
}

struct BenchConfig {
    sessions: u64,
    elements: u32,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=10_000_000).contains(&cli.sessions) {
            return Err("sessions must be between 1 and 10000000".to_string());
        }
        if !(1..=4096).contains(&cli.elements) {
            return Err("elements must be between 1 and 4096".to_string());
        }
        Ok(Self {
            sessions: cli.sessions,
            elements: cli.elements,
            seed: cli.seed,
        })
    }
}

/// Small xorshift generator; quality is irrelevant, determinism is not.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn pick(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

#[derive(Debug, Default, Clone)]
struct KindCounts {
    taps: u64,
    long_presses: u64,
    drags: u64,
    resizes: u64,
}

struct BenchStats {
    elapsed: Duration,
    emitted: u64,
    counts: KindCounts,
}

impl BenchStats {
    fn final_report(&self, config: &BenchConfig) -> String {
        let per_second = self.emitted as f64 / self.elapsed.as_secs_f64().max(1e-9);
        format!(
            "sessions: {}\nelements: {}\nelapsed: {:.3}s\nclassified: {} ({:.0}/s)\n  taps: {}\n  long-presses: {}\n  drags: {}\n  resizes: {}",
            config.sessions,
            config.elements,
            self.elapsed.as_secs_f64(),
            self.emitted,
            per_second,
            self.counts.taps,
            self.counts.long_presses,
            self.counts.drags,
            self.counts.resizes,
        )
    }
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let mut engine: GestureEngine<u32> = GestureEngine::new();
    for index in 0..config.elements {
        let column = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;
        let bounds = BoundsRect::new(
            f64::from(column) * (ELEMENT_WIDTH + 4.0),
            f64::from(row) * (ELEMENT_HEIGHT + 4.0),
            ELEMENT_WIDTH,
            ELEMENT_HEIGHT,
        );
        // mix of configurations so every classification path gets exercised
        let mut overrides = GestureOverrides::default().drag_threshold(8.0);
        if index % 3 == 0 {
            overrides = overrides.enable_resize(true).resize_zone_width(5.0);
        }
        if index % 5 == 0 {
            overrides = overrides.direction(Axis::Vertical);
        }
        engine.register(bounds, index, overrides);
    }

    let counts = Rc::new(RefCell::new(KindCounts::default()));
    let emitted = Rc::new(RefCell::new(0u64));
    let count_sink = Rc::clone(&counts);
    let emitted_sink = Rc::clone(&emitted);
    engine.subscribe(move |event| {
        *emitted_sink.borrow_mut() += 1;
        let mut counts = count_sink.borrow_mut();
        match event.kind {
            GestureKind::Tap => counts.taps += 1,
            GestureKind::LongPress => counts.long_presses += 1,
            kind if kind.is_drag() => counts.drags += 1,
            _ => counts.resizes += 1,
        }
    });

    let mut rng = Rng::new(config.seed);
    let mut clock = Instant::now();
    let started = Instant::now();

    for _ in 0..config.sessions {
        let index = rng.pick(u64::from(config.elements)) as u32;
        let column = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;
        let origin_x = f64::from(column) * (ELEMENT_WIDTH + 4.0);
        let origin_y = f64::from(row) * (ELEMENT_HEIGHT + 4.0);
        synthesize_session(&mut engine, &mut rng, &mut clock, origin_x, origin_y);
    }

    BenchStats {
        elapsed: started.elapsed(),
        emitted: *emitted.borrow(),
        counts: counts.borrow().clone(),
    }
}

/// Drive one complete press-to-release interaction through the engine.
fn synthesize_session(
    engine: &mut GestureEngine<u32>,
    rng: &mut Rng,
    clock: &mut Instant,
    origin_x: f64,
    origin_y: f64,
) {
    // press somewhere in the element body or near an edge
    let press = Point::new(
        origin_x + 2.0 + rng.pick(ELEMENT_WIDTH as u64 - 4) as f64,
        origin_y + 2.0 + rng.pick(ELEMENT_HEIGHT as u64 - 4) as f64,
    );
    let shape = rng.pick(5);
    let touch = shape == 4;
    let contact = TouchId(0);

    let down = if touch {
        PointerEventKind::TouchStart(contact)
    } else {
        PointerEventKind::Down(PointerButton::Left)
    };
    engine.handle_pointer_event(PointerEvent::new(down, press, *clock));

    let travel = match shape {
        // stationary: tap, or long-press once the deadline passes
        0 | 4 => 0.0,
        1 => 30.0 + rng.pick(60) as f64,
        2 => -(30.0 + rng.pick(60) as f64),
        _ => 15.0 + rng.pick(20) as f64,
    };
    let hold = if touch {
        Duration::from_millis(700)
    } else {
        Duration::from_millis(40 + rng.pick(200))
    };

    let mut release = press;
    if travel != 0.0 {
        for step in 1..=4u32 {
            let position = Point::new(press.x + travel * f64::from(step) / 4.0, press.y);
            let kind = if touch {
                PointerEventKind::TouchMoved(contact)
            } else {
                PointerEventKind::Moved
            };
            *clock += hold / 5;
            engine.handle_pointer_event(PointerEvent::new(kind, position, *clock));
            release = position;
        }
    }

    // stationary sessions spend the whole hold in place so a touch press
    // sails past the long-press deadline before release
    *clock += if travel == 0.0 { hold } else { hold / 5 };
    let up = if touch {
        PointerEventKind::TouchEnd(contact)
    } else {
        PointerEventKind::Up(PointerButton::Left)
    };
    engine.handle_pointer_event(PointerEvent::new(up, release, *clock));
}
