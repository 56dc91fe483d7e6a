use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use timeline_gestures::config::{Axis, GestureOverrides};
use timeline_gestures::drivers::console::ConsolePointerDriver;
use timeline_gestures::engine::GestureEngine;
use timeline_gestures::event_loop::{ControlFlow, EventLoop};
use timeline_gestures::events::GestureKind;
use timeline_gestures::geometry::BoundsRect;
use timeline_gestures::time_map;
use timeline_gestures::zone::ResizeEdge;

/// One terminal cell per "pixel"; six cells to the hour keeps the demo
/// timeline readable on an 80-column screen.
const CELLS_PER_HOUR: f64 = 6.0;
const SNAP_MINUTES: i64 = 15;
const LOG_CAPACITY: usize = 6;

#[derive(Debug, Clone, Copy)]
struct DemoTask {
    name: &'static str,
    row: u16,
    start_col: f64,
    width: f64,
    duration_minutes: i64,
}

const TASKS: [DemoTask; 3] = [
    DemoTask {
        name: "write report",
        row: 4,
        start_col: 6.0,
        width: 18.0,
        duration_minutes: 180,
    },
    DemoTask {
        name: "review PRs",
        row: 6,
        start_col: 18.0,
        width: 12.0,
        duration_minutes: 120,
    },
    DemoTask {
        name: "1:1 sync",
        row: 8,
        start_col: 30.0,
        width: 6.0,
        duration_minutes: 60,
    },
];

fn main() -> io::Result<()> {
    timeline_gestures::tracing_sub::init_default();

    let mut engine: GestureEngine<DemoTask> = GestureEngine::new();
    engine.set_cursor_listener(|id, style| {
        tracing::debug!(element = ?id, style = style.class_name(), "cursor change");
    });
    for task in TASKS {
        engine.register(
            BoundsRect::new(task.start_col, f64::from(task.row), task.width, 1.0),
            task,
            GestureOverrides::default()
                .direction(Axis::Horizontal)
                .drag_threshold(2.0)
                .resize_zone_width(2.0)
                .enable_resize(true),
        );
    }
    // dedicated end handle strip hugging the first task, drawn one row below
    engine.register(
        BoundsRect::new(
            TASKS[0].start_col + TASKS[0].width - 1.0,
            f64::from(TASKS[0].row) + 1.0,
            3.0,
            1.0,
        ),
        TASKS[0],
        GestureOverrides::default()
            .drag_threshold(2.0)
            .fixed_resize_edge(ResizeEdge::End),
    );

    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.subscribe(move |event| {
        let task = event.payload;
        let line = match event.kind {
            GestureKind::DragLeft
            | GestureKind::DragRight
            | GestureKind::DragUp
            | GestureKind::DragDown => {
                let shift = time_map::time_shift(event.delta_x, CELLS_PER_HOUR, SNAP_MINUTES);
                if shift == 0 {
                    format!(
                        "{}: {} below one snap interval, no-op",
                        task.name,
                        event.kind.as_str()
                    )
                } else {
                    format!("{}: {} -> shift by {} min", task.name, event.kind.as_str(), shift)
                }
            }
            GestureKind::ResizeStart | GestureKind::ResizeEnd => {
                // dragging the start edge left grows the task, so the pixel
                // delta flips sign for the start edge
                let pixels = if event.kind == GestureKind::ResizeStart {
                    -event.delta_x
                } else {
                    event.delta_x
                };
                let minutes =
                    time_map::duration_change(task.duration_minutes, pixels, CELLS_PER_HOUR, 15);
                format!(
                    "{}: {} -> duration {} min (was {})",
                    task.name,
                    event.kind.as_str(),
                    minutes,
                    task.duration_minutes
                )
            }
            GestureKind::Tap => format!("{}: tap -> tooltip", task.name),
            GestureKind::LongPress => format!("{}: long-press -> context menu", task.name),
        };
        let mut log = sink.borrow_mut();
        log.push(line);
        let overflow = log.len().saturating_sub(LOG_CAPACITY);
        log.drain(..overflow);
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    terminal::enable_raw_mode()?;
    let mut driver = ConsolePointerDriver::new();
    driver
        .enable_capture()
        .map_err(|err| io::Error::other(err.to_string()))?;

    let result = run_demo(&mut engine, driver, &log);

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    result
}

fn run_demo(
    engine: &mut GestureEngine<DemoTask>,
    driver: ConsolePointerDriver,
    log: &Rc<RefCell<Vec<String>>>,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(16));
    event_loop.run(|driver, event| {
        if let Some(event) = event {
            engine.handle_pointer_event(event);
        } else {
            engine.tick(Instant::now());
            draw(engine, &log.borrow())?;
        }
        if let Some(key) = driver.take_key() {
            let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                return Ok(ControlFlow::Quit);
            }
        }
        Ok(ControlFlow::Continue)
    })
}

fn draw(engine: &GestureEngine<DemoTask>, log: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(
        stdout,
        Print("timeline-gestures demo: drag a bar, grab an edge, tap; q quits")
    )?;
    for task in TASKS {
        queue!(stdout, cursor::MoveTo(task.start_col as u16, task.row))?;
        let mut bar = "█".repeat(task.width as usize);
        bar.push_str("  ");
        bar.push_str(task.name);
        queue!(stdout, Print(bar))?;
    }
    // the dedicated resize handle for the first task
    queue!(
        stdout,
        cursor::MoveTo(
            (TASKS[0].start_col + TASKS[0].width - 1.0) as u16,
            TASKS[0].row + 1
        ),
        Print("▀▀▀")
    )?;
    let status = if engine.is_gesture_active() {
        "gesture in flight"
    } else {
        "idle"
    };
    queue!(stdout, cursor::MoveTo(0, 11), Print(status))?;
    for (offset, line) in log.iter().enumerate() {
        queue!(stdout, cursor::MoveTo(0, 13 + offset as u16), Print(line))?;
    }
    stdout.flush()
}
