use std::fs;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use orrery::bodies::legend_order;
use orrery::{EphemerisTable, FrameState, PlaybackParams, PlaybackSession};

/// Replay a precomputed orbit table as animation frames on stdout.
///
/// The engine does no drawing itself; this binary is the reference consumer of
/// the per-frame query, printing either human-readable lines or JSON lines an
/// external renderer can read.
#[derive(Parser, Debug)]
#[command(name = "orrery")]
struct Args {
    /// CSV ephemeris: a 't' column (seconds) plus '<body>_x'/'<body>_y'
    /// columns (meters) per tracked body
    ephemeris: Utf8PathBuf,

    /// JSON file with playback parameters; fields it omits keep their defaults
    #[arg(long)]
    params: Option<Utf8PathBuf>,

    /// Override the frame budget
    #[arg(long)]
    max_frames: Option<usize>,

    /// Override the trail window size
    #[arg(long)]
    trail_length: Option<usize>,

    /// Print at most this many frames, evenly spread over the playback
    #[arg(long)]
    frames: Option<usize>,

    /// Emit frames as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

/// JSON-lines form of one frame, the machine-readable renderer surface.
#[derive(Serialize)]
struct FrameDump {
    frame: usize,
    t_years: f64,
    bodies: Vec<BodyDump>,
}

#[derive(Serialize)]
struct BodyDump {
    name: String,
    x: f64,
    y: f64,
    trail: Vec<[f64; 2]>,
}

fn load_params(args: &Args) -> Result<PlaybackParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading parameter file {path}"))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing parameter file {path}"))?
        }
        None => PlaybackParams::default(),
    };
    if let Some(max_frames) = args.max_frames {
        params.max_frames = max_frames;
    }
    if let Some(trail_length) = args.trail_length {
        params.trail_length = trail_length;
    }
    Ok(params)
}

fn print_text_frame(session: &PlaybackSession, state: &FrameState<'_>) {
    let positions = state
        .bodies
        .iter()
        .map(|body| {
            format!(
                "{} ({:.3}, {:.3})",
                session.bodies()[body.body].name,
                body.position.x,
                body.position.y
            )
        })
        .join("  ");
    println!(
        "frame {:>4}  t = {:>7.2} yr  {}",
        state.frame,
        state.years(),
        positions
    );
}

fn print_json_frame(session: &PlaybackSession, state: &FrameState<'_>) -> Result<()> {
    let dump = FrameDump {
        frame: state.frame,
        t_years: state.years(),
        bodies: state
            .bodies
            .iter()
            .map(|body| BodyDump {
                name: session.bodies()[body.body].name.clone(),
                x: body.position.x,
                y: body.position.y,
                trail: body.trail.iter().map(|p| [p.x, p.y]).collect(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string(&dump)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let params = load_params(&args)?;

    let table = EphemerisTable::from_csv(&args.ephemeris)
        .with_context(|| format!("loading ephemeris {}", args.ephemeris))?;
    eprintln!("{}", table.summary());

    let session = PlaybackSession::new(&table, &params)?;
    if session.stride() > 1 {
        eprintln!(
            "downsampled to {} frames (1 of every {} samples)",
            session.frame_count(),
            session.stride()
        );
    }

    let viewport = session.viewport();
    eprintln!(
        "close-in panel ±{} AU, full-extent panel ±{} AU",
        viewport.inner_radius, viewport.outer_radius
    );
    eprintln!(
        "close-in bodies: {}",
        session
            .inner_set()
            .iter()
            .map(|&body| {
                let body = &session.bodies()[body];
                format!("{} {}", body.name, body.style.color.to_hex())
            })
            .join(", ")
    );
    eprintln!(
        "legend: {}",
        legend_order(session.bodies(), session.body_count())
            .iter()
            .map(|&body| session.bodies()[body].name.as_str())
            .join(", ")
    );

    if session.frame_count() == 0 {
        eprintln!("nothing to play");
        return Ok(());
    }

    // Spread the requested number of printed frames over the playback.
    let step = match args.frames {
        Some(limit) if limit > 0 && session.frame_count() > limit => {
            session.frame_count() / limit
        }
        _ => 1,
    };
    for frame in (0..session.frame_count()).step_by(step) {
        let state = session.query(frame);
        if args.json {
            print_json_frame(&session, &state)?;
        } else {
            print_text_frame(&session, &state);
        }
    }

    Ok(())
}
