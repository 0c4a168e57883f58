//! Measure classifier for segmented bullet charts.
//!
//! Every measure shares one stacking lane and is layered by draw order, so
//! the classifier has two jobs per sign group: rank measures by magnitude to
//! assign scale colours, then re-order them so the largest bar is emitted
//! first and stays visible behind the smaller ones. The two sorts are
//! deliberately independent; collapsing them would change either the colour
//! ranking or the draw order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::core::{
    config::ClassifyConfig,
    constants::STACK_LANE,
    error::ConfigError,
    palette::Palette,
};

/// One render-ready measure.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedPoint {
    /// Resolved primary measure.
    pub value: f64,
    /// Resolved baseline, when a baseline accessor is configured.
    pub baseline: Option<f64>,
    /// Position in the input sequence; kept so external legends stay in sync
    /// after reordering.
    pub original_index: usize,
    /// Always [`STACK_LANE`]; measures separate by z-order, not position.
    pub stack_position: u32,
    /// Scale colour, already resolved from the palette.
    pub color: String,
    /// Unique key for downstream render elements, fresh per call.
    pub key: String,
}

struct Extracted {
    value: f64,
    baseline: Option<f64>,
    original_index: usize,
}

/// Partition `points` by sign, assign scale colours by magnitude rank, and
/// emit in draw order: negatives first (most negative leading), then
/// non-negatives (largest leading).
///
/// Output length always equals input length; an empty input yields an empty
/// output. The only failure mode is an accessor that cannot produce a finite
/// number, which aborts the whole call.
pub fn classify(
    points: &[Value],
    cfg: &ClassifyConfig,
) -> Result<Vec<ClassifiedPoint>, ConfigError> {
    let mut negative = Vec::new();
    let mut non_negative = Vec::new();

    for (i, record) in points.iter().enumerate() {
        let value = cfg.value.resolve(record, i)?;
        let baseline = match &cfg.baseline {
            Some(a) => Some(a.resolve(record, i)?),
            None => None,
        };
        let m = Extracted {
            value,
            baseline,
            original_index: i,
        };
        if value < 0.0 {
            negative.push(m);
        } else {
            non_negative.push(m);
        }
    }

    let (negative_scale, positive_scale) = if cfg.invert_palette {
        (&cfg.positive_palette, &cfg.negative_palette)
    } else {
        (&cfg.negative_palette, &cfg.positive_palette)
    };

    // Colour pass: rank 0 = most extreme value of the group.
    negative.sort_by(descending);
    let mut negative = paint(negative, negative_scale);
    non_negative.sort_by(ascending);
    let mut non_negative = paint(non_negative, positive_scale);

    // Emission pass: largest bar first so the rest stay visible on top.
    negative.sort_by(|a, b| a.value.total_cmp(&b.value).then(tie(a, b)));
    non_negative.sort_by(|a, b| b.value.total_cmp(&a.value).then(tie(a, b)));

    let mut out = negative;
    out.append(&mut non_negative);

    let mut next_key = 0usize;
    for p in &mut out {
        p.key = format!("{}-{next_key}", cfg.key_prefix);
        next_key += 1;
    }
    Ok(out)
}

// --- Helpers ---

fn ascending(a: &Extracted, b: &Extracted) -> Ordering {
    a.value
        .total_cmp(&b.value)
        .then_with(|| a.original_index.cmp(&b.original_index))
}

fn descending(a: &Extracted, b: &Extracted) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.original_index.cmp(&b.original_index))
}

fn tie(a: &ClassifiedPoint, b: &ClassifiedPoint) -> Ordering {
    a.original_index.cmp(&b.original_index)
}

fn paint(group: Vec<Extracted>, scale: &Palette) -> Vec<ClassifiedPoint> {
    group
        .into_iter()
        .enumerate()
        .map(|(rank, m)| ClassifiedPoint {
            value: m.value,
            baseline: m.baseline,
            original_index: m.original_index,
            stack_position: STACK_LANE,
            color: scale.pick(rank).to_owned(),
            key: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::accessor::Accessor;
    use serde_json::json;

    fn cfg_with(positive: &[&str], negative: &[&str], invert: bool) -> ClassifyConfig {
        ClassifyConfig::builder()
            .value(Accessor::path("y"))
            .invert(invert)
            .positive_palette(Palette::new(positive.iter().copied()))
            .negative_palette(Palette::new(negative.iter().copied()))
            .build()
            .unwrap()
    }

    fn ys(points: &[ClassifiedPoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn worked_example_single_entry_palettes() {
        let data = vec![json!({"y": 5}), json!({"y": -3}), json!({"y": 2}), json!({"y": -8})];
        let out = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();

        assert_eq!(ys(&out), vec![-8.0, -3.0, 5.0, 2.0]);
        assert_eq!(out[0].color, "N");
        assert_eq!(out[1].color, "N");
        assert_eq!(out[2].color, "P");
        assert_eq!(out[3].color, "P");
        // legend sync survives reordering
        assert_eq!(
            out.iter().map(|p| p.original_index).collect::<Vec<_>>(),
            vec![3, 1, 0, 2]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = classify(&[], &ClassifyConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn length_is_preserved() {
        let data: Vec<Value> = (0..17).map(|i| json!({"y": f64::from(i - 9)})).collect();
        let out = classify(&data, &cfg_with(&["a", "b"], &["c"], false)).unwrap();
        assert_eq!(out.len(), data.len());
    }

    #[test]
    fn negatives_all_precede_non_negatives() {
        let data = vec![
            json!({"y": 3}),
            json!({"y": -1}),
            json!({"y": 0}),
            json!({"y": -7}),
            json!({"y": 12}),
        ];
        let out = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        let first_non_negative = out.iter().position(|p| p.value >= 0.0).unwrap();
        assert!(out[..first_non_negative].iter().all(|p| p.value < 0.0));
        assert!(out[first_non_negative..].iter().all(|p| p.value >= 0.0));
    }

    #[test]
    fn colour_rank_is_independent_of_draw_order() {
        // Colour pass sorts non-negatives ascending, so the smallest value
        // gets index 0; emission then flips to descending.
        let data = vec![json!({"y": 10}), json!({"y": 30}), json!({"y": 20})];
        let out = classify(&data, &cfg_with(&["c0", "c1", "c2"], &["N"], false)).unwrap();

        assert_eq!(ys(&out), vec![30.0, 20.0, 10.0]);
        let colour_of = |v: f64| &out.iter().find(|p| p.value == v).unwrap().color;
        assert_eq!(colour_of(10.0), "c0");
        assert_eq!(colour_of(20.0), "c1");
        assert_eq!(colour_of(30.0), "c2");
    }

    #[test]
    fn negative_colour_rank_leads_with_most_extreme() {
        // Colour pass sorts negatives descending by value, i.e. -1 before -9.
        let data = vec![json!({"y": -9}), json!({"y": -1}), json!({"y": -4})];
        let out = classify(&data, &cfg_with(&["P"], &["n0", "n1", "n2"], false)).unwrap();

        assert_eq!(ys(&out), vec![-9.0, -4.0, -1.0]);
        let colour_of = |v: f64| &out.iter().find(|p| p.value == v).unwrap().color;
        assert_eq!(colour_of(-1.0), "n0");
        assert_eq!(colour_of(-4.0), "n1");
        assert_eq!(colour_of(-9.0), "n2");
    }

    #[test]
    fn colour_index_wraps_modulo_palette_length() {
        let data: Vec<Value> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|v| json!({ "y": v }))
            .collect();
        let out = classify(&data, &cfg_with(&["a", "b"], &["N"], false)).unwrap();
        let colour_of = |v: f64| out.iter().find(|p| p.value == v).unwrap().color.as_str();
        // ascending rank: 1→a, 2→b, 3→a, 4→b, 5→a
        assert_eq!(colour_of(1.0), "a");
        assert_eq!(colour_of(2.0), "b");
        assert_eq!(colour_of(3.0), "a");
        assert_eq!(colour_of(4.0), "b");
        assert_eq!(colour_of(5.0), "a");
    }

    #[test]
    fn inversion_swaps_scales_but_not_positions() {
        let data = vec![json!({"y": 5}), json!({"y": -3}), json!({"y": 2}), json!({"y": -8})];
        let plain = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        let inverted = classify(&data, &cfg_with(&["P"], &["N"], true)).unwrap();

        assert_eq!(ys(&plain), ys(&inverted));
        for (a, b) in plain.iter().zip(&inverted) {
            assert_eq!(a.original_index, b.original_index);
            assert_ne!(a.color, b.color);
        }
        assert_eq!(inverted[0].color, "P"); // negative group, inverted
        assert_eq!(inverted[2].color, "N");
    }

    #[test]
    fn ties_keep_input_order_in_both_passes() {
        let data = vec![json!({"y": 4}), json!({"y": 4}), json!({"y": 4})];
        let out = classify(&data, &cfg_with(&["c0", "c1", "c2"], &["N"], false)).unwrap();

        assert_eq!(
            out.iter().map(|p| p.original_index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            out.iter().map(|p| p.color.as_str()).collect::<Vec<_>>(),
            vec!["c0", "c1", "c2"]
        );
    }

    #[test]
    fn original_indices_form_a_permutation() {
        let data: Vec<Value> = [-2.0, 7.0, 0.0, -2.0, 7.0]
            .iter()
            .map(|v| json!({ "y": v }))
            .collect();
        let out = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        let mut seen = out.iter().map(|p| p.original_index).collect::<Vec<_>>();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_counts_as_non_negative() {
        let data = vec![json!({"y": 0})];
        let out = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        assert_eq!(out[0].color, "P");
    }

    #[test]
    fn all_points_sit_in_the_shared_lane() {
        let data = vec![json!({"y": 1}), json!({"y": -1})];
        let out = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        assert!(out.iter().all(|p| p.stack_position == STACK_LANE));
    }

    #[test]
    fn keys_are_unique_and_prefixed() {
        let data = vec![json!({"y": 1}), json!({"y": 2}), json!({"y": -1})];
        let cfg = ClassifyConfig::builder()
            .value(Accessor::path("y"))
            .key_prefix("seg")
            .build()
            .unwrap();
        let out = classify(&data, &cfg).unwrap();
        assert_eq!(
            out.iter().map(|p| p.key.as_str()).collect::<Vec<_>>(),
            vec!["seg-0", "seg-1", "seg-2"]
        );
    }

    #[test]
    fn baseline_accessor_is_applied_when_configured() {
        let data = vec![json!({"y": 6, "y0": 2}), json!({"y": -1, "y0": 0})];
        let cfg = ClassifyConfig::builder()
            .value(Accessor::path("y"))
            .baseline(Accessor::path("y0"))
            .build()
            .unwrap();
        let out = classify(&data, &cfg).unwrap();
        let six = out.iter().find(|p| p.value == 6.0).unwrap();
        assert_eq!(six.baseline, Some(2.0));
    }

    #[test]
    fn accessor_failure_aborts_the_whole_call() {
        let data = vec![json!({"y": 1}), json!({"other": 2})];
        let err = classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap_err();
        assert!(matches!(err, ConfigError::Unresolved { record: 1, .. }));
    }

    #[test]
    fn input_records_are_not_mutated() {
        let data = vec![json!({"y": 5, "label": "q1"})];
        let before = data.clone();
        classify(&data, &cfg_with(&["P"], &["N"], false)).unwrap();
        assert_eq!(data, before);
    }
}
