//! Build a [`Palette`] from small hex tables and print it as JSON.
//!
//! Run with `RUST_LOG=trace` to see every key being rewritten.
use env_logger::Env;
use otty_palette::{ConvertOptions, Palette};
use serde_json::json;

static COLORS: [(&str, &str); 4] = [
    ("#1E1E2E", "base"),
    ("#CDD6F4", "text"),
    ("#F38BA8", "red"),
    ("#A6E3A1", "green"),
];

static ACCENTS: [(&str, &[(&str, &str)]); 2] = [
    ("warm", &[("#FAB387", "peach"), ("#F9E2AF", "yellow")]),
    ("cool", &[("#89B4FA", "blue"), ("#94E2D5", "teal")]),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let options = ConvertOptions::from_json(&json!({ "hex": "strict" }));
    let accents = ACCENTS
        .iter()
        .map(|(category, colors)| (*category, colors.iter().copied()));
    let palette = Palette::init_with(COLORS, accents, &options)?;

    println!("{}", serde_json::to_string_pretty(&palette)?);
    Ok(())
}
