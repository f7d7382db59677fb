use anyhow::Context;
use rowca::{
    Control, Digits, Driver, GenerationEngine, Glyphs, LedStripRenderer, Renderer, RowCodec, Rgb,
    RunLengthEncoded, TextRenderer, enc,
};
use std::{io, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use options::Output;
use stats::{Recorder, SwitchRecorder};

fn initial_row(args: &options::Args) -> anyhow::Result<Vec<u8>> {
    if let Some(file_name) = args.input_file() {
        let encoded_str = std::fs::read_to_string(&file_name)
            .with_context(|| format!("read initial row from {file_name}"))?;
        let row = enc::decode_any(&encoded_str)
            .with_context(|| format!("decode initial row from {file_name}"))?;
        check_input_width(&row, args.width_arg()?)
            .with_context(|| format!("initial row from {file_name}"))?;
        return Ok(row);
    }

    Ok(args.seed()?.create_row(args.width()?))
}

/// A row read from a file must agree with an explicit `--width`
fn check_input_width(row: &[u8], width: Option<usize>) -> anyhow::Result<()> {
    match width {
        Some(width) if width != row.len() => {
            anyhow::bail!("row has {} cells but --width is {width}", row.len())
        }
        _ => Ok(()),
    }
}

/// Runs the automaton through `renderer`, logging stats reports as they come
fn drive<R: Renderer>(
    game: GenerationEngine,
    renderer: R,
    delay: Option<Duration>,
    limit: Option<u64>,
    stats: &mut SwitchRecorder,
) -> io::Result<GenerationEngine> {
    let mut driver = Driver::new(game, renderer).set_delay(delay).set_limit(limit);
    driver.run_with(|engine, _| {
        stats.record(engine.generation(), engine.alive_count());
        if stats.has_report() {
            info!("{}", stats.report());
        }
        Ok(Control::Continue)
    })?;
    Ok(driver.into_parts().0)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let rule = args.rule()?;
    let row = initial_row(&args)?;
    let game = GenerationEngine::new(row.len(), &row, rule)?;
    info!(%rule, len = game.len(), alive = game.alive_count(), "engine ready");

    let mut stats = SwitchRecorder::new(game.alive_count(), args.stats_file().is_some());
    let delay = args.sleep()?;
    let limit = args.generations()?;

    // every front end shares the same engine, only the renderer changes
    let game = match args.output() {
        Output::Text => {
            let renderer = TextRenderer::with_codec(io::stdout().lock(), Glyphs::default());
            drive(game, renderer, delay, limit, &mut stats)?
        }
        Output::Digits => {
            let renderer = TextRenderer::with_codec(io::stdout().lock(), Digits);
            drive(game, renderer, delay, limit, &mut stats)?
        }
        Output::Led => {
            let segment = args.segment()?;
            let frames = Glyphs {
                alive: 'R',
                dead: '-',
            };
            // stand-in for the strip driver, prints the frame one pin per group
            let sink = move |frame: &[Rgb]| -> io::Result<()> {
                let lit: Vec<u8> = frame.iter().map(|p| u8::from(*p != Rgb::BLACK)).collect();
                let groups: Vec<String> = lit.chunks(segment).map(|c| frames.encode(c)).collect();
                println!("{}", groups.join(" "));
                Ok(())
            };
            let renderer = LedStripRenderer::new(game.len(), sink).set_segment_len(segment);
            drive(game, renderer, delay, limit, &mut stats)?
        }
        Output::Console => {
            let renderer = console::ConsoleRender::new()?;
            let mut driver = Driver::new(game, renderer).set_delay(delay).set_limit(limit);
            driver.run_with(|engine, console| {
                while let Some(cmd) = console.poll_events()? {
                    if let console::ConsoleCommand::Exit = cmd {
                        return Ok(Control::Stop);
                    }
                }
                stats.record(engine.generation(), engine.alive_count());
                // always refresh the footer in console mode
                console.set_report(stats.report());
                Ok(Control::Continue)
            })?;
            // restores the terminal before anything else is printed
            let (game, console) = driver.into_parts();
            drop(console);
            game
        }
    };
    info!(generation = game.generation(), alive = game.alive_count(), "finished");

    if let Some(file_name) = args.stats_file() {
        stats
            .save(&file_name)
            .with_context(|| format!("write stats to {file_name}"))?;
    }

    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default()
            .set_name(format!("rowca generation {}", game.generation()))
            .set_rule(game.rule());
        let encoded_row = encoder.encode(&game.into_row());
        std::fs::write(&file_name, encoded_row)
            .with_context(|| format!("write final row to {file_name}"))?;
    }

    Ok(())
}
