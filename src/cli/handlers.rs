use serde_json::Value;

use crate::{
    core::{
        accessor::Accessor,
        classify::{ClassifiedPoint, classify},
        color::colorize,
        config::ClassifyConfig,
        data::{read_csv_from_path, read_json_from_path},
        error::ChartError,
        palette::Palette,
        rng::Lcg,
    },
    render::{render_preview, terminal_width},
};

use super::parse::{ClassifyArgs, DemoArgs};

pub fn classify_file(a: ClassifyArgs) -> Result<(), ChartError> {
    let records = if a.json {
        read_json_from_path(&a.file)?
    } else {
        read_csv_from_path(&a.file)?
    };

    let mut b = ClassifyConfig::builder()
        .invert(a.invert)
        .key_prefix(a.key_prefix);
    if let Some(y) = &a.y {
        b = b.value(Accessor::from_spec(y));
    }
    if let Some(y0) = &a.y0 {
        b = b.baseline(Accessor::from_spec(y0));
    }
    if let Some(list) = &a.positive {
        b = b.positive_palette(Palette::from_list(list));
    }
    if let Some(list) = &a.negative {
        b = b.negative_palette(Palette::from_list(list));
    }
    let cfg = b.build()?;

    let classified = classify(&records, &cfg)?;
    print_table(&classified);
    if a.preview {
        print!("{}", render_preview(&classified, terminal_width()));
    }
    Ok(())
}

pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let records: Vec<Value> = (0..a.points)
        .map(|_| Value::from(rng.normal(a.mu, a.sigma)))
        .collect();

    // raw numbers, so the default identity accessor applies
    let cfg = ClassifyConfig::builder().invert(a.invert).build()?;
    let classified = classify(&records, &cfg)?;
    print_table(&classified);
    print!("{}", render_preview(&classified, terminal_width()));
    Ok(())
}

/// Pretty-print the built-in colour scales.
pub fn palettes() {
    for (name, scale) in [
        ("positive (segmented blue)", Palette::segmented_blue()),
        ("negative (red)", Palette::negative_red()),
    ] {
        println!("\n{name}:");
        for color in scale.iter() {
            println!("  {}  {color}", colorize(color, "██"));
        }
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• CSV with header   : {bin} classify sales.csv --y revenue --preview
• Headerless CSV    : {bin} classify raw.csv --y 0
• JSON records      : {bin} classify points.json --json --y metrics.q1
• Nested path       : {bin} classify points.json --json --y 'y[2].also.nested'
• Inverted scales   : {bin} classify sales.csv --y revenue --invert
• Custom colours    : {bin} classify sales.csv --y revenue \\
                       --positive '#0066cc,#519de9' --negative '#c9190b'
• Random demo       : {bin} demo --points 12 --sigma 40 --seed 7
"
    );
}

// --- Helpers ---

fn print_table(points: &[ClassifiedPoint]) {
    println!("{:<12} {:>4} {:>12} {:>10} {:>5}  colour", "key", "row", "value", "baseline", "lane");
    for p in points {
        let baseline = p
            .baseline
            .map_or_else(|| "-".to_owned(), |b| format!("{b:.2}"));
        println!(
            "{:<12} {:>4} {:>12.2} {:>10} {:>5}  {} {}",
            p.key,
            p.original_index,
            p.value,
            baseline,
            p.stack_position,
            colorize(&p.color, "██"),
            p.color,
        );
    }
}
