use std::time::Instant;
use text_diff::{diff_with_summary, source_text, target_text, DiffConfig};

fn jabberwocky() -> String {
    let mut text = String::from(
        "`Twas brillig, and the slithy toves\nDid gyre and gimble in the wabe:\n\
         All mimsy were the borogoves,\nAnd the mome raths outgrabe.\n",
    );
    for _ in 0..10 {
        let copy = text.clone();
        text.push_str(&copy);
    }
    text
}

fn major_general() -> String {
    let mut text = String::from(
        "I am the very model of a modern major general,\n\
         I've information vegetable, animal, and mineral,\n\
         I know the kings of England, and I quote the fights historical,\n\
         From Marathon to Waterloo, in order categorical.\n",
    );
    for _ in 0..10 {
        let copy = text.clone();
        text.push_str(&copy);
    }
    text
}

#[test]
fn deadline_bounds_latency_on_dissimilar_megatexts() {
    let text1 = jabberwocky();
    let text2 = major_general();
    let timeout = 0.1;
    let config = DiffConfig::builder().timeout_secs(timeout).build();

    let started = Instant::now();
    let (script, summary) = diff_with_summary(&text1, &text2, &config);
    let elapsed = started.elapsed().as_secs_f64();

    // The check is cooperative, so the run may overshoot by the cost of the
    // in-flight iterations, but never unboundedly.
    assert!(elapsed >= timeout, "finished before the deadline: {elapsed}");
    assert!(elapsed < 5.0, "deadline failed to bound latency: {elapsed}");

    // Degradation trades minimality, never validity.
    assert!(!summary.complete);
    assert!(summary.degraded_regions > 0);
    assert_eq!(text1, source_text(&script));
    assert_eq!(text2, target_text(&script));
}

#[test]
fn unlimited_budget_reports_complete() {
    let config = DiffConfig::most_precise();
    let (script, summary) = diff_with_summary("kitten", "sitting", &config);
    assert!(summary.complete);
    assert_eq!(0, summary.degraded_regions);
    assert_eq!(summary.op_count, script.len());
}

#[test]
fn small_inputs_finish_within_budget() {
    let config = DiffConfig::default();
    let (_, summary) = diff_with_summary("abcdef", "abXdef", &config);
    assert!(summary.complete);
}
