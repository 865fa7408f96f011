//! Offline harness: drives a built-in effect against synthetic audio and
//! prints what each tick would send to the panels.

use std::env;
use std::process;

use abi_stable::std_types::RResult::{RErr, ROk};
use panel_fx::effects;
use panel_fx::utils::{Config, SimAudio};
use panel_fx_api::{LayoutFFI, PanelFFI, RgbFFI};

const DEFAULT_TICKS: u32 = 120;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--list".to_string()) {
        for name in effects::EFFECT_NAMES {
            match effects::metadata(name) {
                Some(meta) => println!("{}  {:?}", name, meta.labels.as_slice()),
                None => println!("{}", name),
            }
        }
        return;
    }

    let effect_name = flag_value(&args, "--effect").unwrap_or_else(|| "ripple".to_string());
    let ticks: u32 = flag_value(&args, "--ticks")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let config = Config::load();
    let layout = demo_layout();

    let mut effect = match effects::create(&effect_name, &config) {
        Some(effect) => effect,
        None => {
            eprintln!("Unknown effect {:?}; try --list", effect_name);
            process::exit(1);
        }
    };

    let request = match effect.init(&layout) {
        ROk(request) => request,
        RErr(e) => {
            eprintln!("Effect init failed: {}", e);
            process::exit(1);
        }
    };
    println!(
        "Running {} on {} panels for {} ticks (energy: {}, beat: {}, fft bins: {})",
        effect_name,
        layout.len(),
        ticks,
        request.energy,
        request.beat,
        request.fft_bins
    );

    let mut audio = SimAudio::new(request.fft_bins);
    for tick in 0..ticks {
        let frame = effect.frame(&audio.next_features());
        let lit: Vec<String> = frame
            .frames
            .iter()
            .filter(|f| f.color != RgbFFI::BLACK)
            .map(|f| {
                format!(
                    "{}#{:02x}{:02x}{:02x}/{}",
                    f.panel_id, f.color.r, f.color.g, f.color.b, f.transition
                )
            })
            .collect();
        if !lit.is_empty() {
            println!("tick {:3}: {}", tick, lit.join(" "));
        }
    }

    effect.cleanup();
}

/// Value following a `--flag` argument, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Ten panels in two rows, centroids 100 units apart.
fn demo_layout() -> LayoutFFI {
    let mut panels = Vec::new();
    for row in 0..2u16 {
        for col in 0..5u16 {
            panels.push(PanelFFI::new(
                row * 5 + col + 1,
                f32::from(col) * 100.0,
                f32::from(row) * 100.0,
                60.0,
            ));
        }
    }
    LayoutFFI::new(panels)
}
