//! Continuous-time signal demo.
//!
//! Plays the scripted scene in the terminal: the sinusoid is plotted as ASCII,
//! the equation sits on top and the parameter readouts in the upper-left corner.
//! Amplitude, phase and frequency change one after another.
//!
//! Set `RUST_LOG=wavescene=debug` to see stage and phase logging on stderr.

use std::io::{Stdout, Write, stdout};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    terminal::{self, ClearType},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wavescene::animation::{Effect, SceneObject, Stage};
use wavescene::coords::{Axes, CoordinateSystem, RenderPoint};
use wavescene::labels::{EQUATION_TEXT, LabelTransition};
use wavescene::render::{Frame, Renderer};
use wavescene::{Parameter, Scene, SceneConfig};

#[derive(Parser, Debug)]
#[command(name = "continuous_time_signal")]
#[command(about = "Animate a sinusoid whose amplitude, phase and frequency change over time")]
struct Cli {
    /// Frames per scene time unit
    #[arg(long, default_value_t = 30.0)]
    frame_rate: f64,

    /// Samples per curve
    #[arg(long, default_value_t = 201)]
    resolution: usize,

    /// Pause after each reveal and change, in scene time units
    #[arg(long, default_value_t = 2.0)]
    hold: f64,

    /// Plot width in terminal columns
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Plot height in terminal rows
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Render as fast as possible instead of in real time
    #[arg(long)]
    no_delay: bool,
}

/// Plots frames as ASCII in the terminal.
struct TerminalRenderer {
    out: Stdout,
    width: u16,
    height: u16,
    /// Render-space extent of the axes
    extent: (f64, f64),
    /// Render-space positions of the t axis ticks
    ticks: Vec<RenderPoint>,
    frame_delay: Option<Duration>,
    status: String,
}

impl TerminalRenderer {
    fn new(cli: &Cli, axes: &Axes) -> wavescene::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let width = cli.width.max(20);
        let height = cli.height.max(8);
        // The status line takes one extra row
        if width > columns || height + 1 > rows {
            return Err(wavescene::Error::Render(format!(
                "plot needs {width}x{} cells, terminal is {columns}x{rows}",
                height + 1
            )));
        }

        let (x_range, y_range) = (axes.x_range(), axes.y_range());
        let y_origin = 0.0_f64.clamp(y_range.min, y_range.max);
        let steps = ((x_range.max - x_range.min) / x_range.step).floor() as usize;
        let ticks = (0..=steps)
            .map(|i| axes.to_render(x_range.min + i as f64 * x_range.step, y_origin))
            .collect();

        Ok(Self {
            out: stdout(),
            width,
            height,
            extent: axes.extent(),
            ticks,
            frame_delay: (!cli.no_delay).then(|| Duration::from_secs_f64(1.0 / cli.frame_rate)),
            status: String::new(),
        })
    }

    /// Maps a render-space point to a plot cell, if it falls inside the plot.
    fn cell(&self, point: RenderPoint) -> Option<(usize, usize)> {
        let (w, h) = self.extent;
        let u = (point.x + w / 2.0) / w;
        let v = (h / 2.0 - point.y) / h;
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        let col = (u * (self.width - 1) as f64).round() as usize;
        let row = (v * (self.height - 1) as f64).round() as usize;
        Some((col, row))
    }

    fn put(grid: &mut [Vec<char>], col: usize, row: usize, text: &str) {
        let Some(line) = grid.get_mut(row) else {
            return;
        };
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = line.get_mut(col + offset) {
                *cell = ch;
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn enter_stage(&mut self, stage: Stage) -> wavescene::Result<()> {
        self.status = format!("stage: {stage}");
        Ok(())
    }

    fn reveal(
        &mut self,
        object: SceneObject,
        effect: Effect,
        _run_time: f64,
    ) -> wavescene::Result<()> {
        self.status = format!("{effect:?} {object:?}");
        Ok(())
    }

    fn conceal(
        &mut self,
        object: SceneObject,
        effect: Effect,
        _run_time: f64,
    ) -> wavescene::Result<()> {
        self.status = format!("{effect:?} {object:?}");
        Ok(())
    }

    fn transform(&mut self, transition: &LabelTransition) -> wavescene::Result<()> {
        self.status = format!("{}  ->  {}", transition.from, transition.to);
        Ok(())
    }

    fn hold(&mut self, duration: f64) -> wavescene::Result<()> {
        self.status = format!("hold {duration}");
        Ok(())
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> wavescene::Result<()> {
        let mut grid = vec![vec![' '; self.width as usize]; self.height as usize];
        let visible = |object: SceneObject| frame.visible.contains(&object);

        if visible(SceneObject::Axes) {
            let (w, h) = self.extent;
            if let Some((_, row)) = self.cell(RenderPoint::new(0.0, 0.0)) {
                grid[row].iter_mut().for_each(|cell| *cell = '-');
            }
            if let Some((col, _)) = self.cell(RenderPoint::new(-w / 2.0, h / 2.0)) {
                grid.iter_mut().for_each(|line| line[col] = '|');
            }
            for tick in &self.ticks {
                if let Some((col, row)) = self.cell(*tick) {
                    grid[row][col] = '+';
                }
            }
        }
        if visible(SceneObject::AxisLabels) {
            for label in frame.axis_labels {
                if let Some((col, row)) = self.cell(label.anchor) {
                    let col = col.saturating_sub(label.text.chars().count());
                    Self::put(&mut grid, col, row, &label.text);
                }
            }
        }
        if visible(SceneObject::Curve) {
            for point in frame.curve {
                if let Some((col, row)) = self.cell(*point) {
                    grid[row][col] = '*';
                }
            }
        }
        if visible(SceneObject::Equation) {
            let col = (self.width as usize).saturating_sub(EQUATION_TEXT.chars().count()) / 2;
            Self::put(&mut grid, col, 0, EQUATION_TEXT);
        }
        for (row, parameter) in Parameter::ALL.into_iter().enumerate() {
            if visible(SceneObject::ParameterLabel(parameter)) {
                Self::put(&mut grid, 1, row + 1, &frame.labels.current(parameter).text);
            }
        }

        self.out.queue(cursor::MoveTo(0, 0))?;
        for line in &grid {
            let line: String = line.iter().collect();
            write!(self.out, "{line}\r\n")?;
        }
        write!(
            self.out,
            "t = {:6.2}  {:<60}\r\n",
            frame.clock.time, self.status
        )?;
        self.out.flush()?;

        if let Some(delay) = self.frame_delay {
            thread::sleep(delay);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wavescene=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = SceneConfig::default()
        .with_frame_rate(cli.frame_rate)
        .with_resolution(cli.resolution)
        .with_hold(cli.hold);
    let mut scene = Scene::new(config)?;
    let mut renderer = TerminalRenderer::new(&cli, scene.axes())?;

    renderer.out.execute(terminal::Clear(ClearType::All))?;
    renderer.out.execute(cursor::Hide)?;
    let result = scene.run(&mut renderer);
    renderer.out.execute(cursor::Show)?;

    let summary = result?;
    println!(
        "Rendered {} frames through {} stages; final A = {}, f = {}, φ = {}",
        summary.frames,
        summary.stages.len(),
        summary.store.amplitude(),
        summary.store.frequency(),
        summary.store.phase(),
    );
    Ok(())
}
