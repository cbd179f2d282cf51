use super::*;

fn summary_with(key_points: &[&str], code_samples: &[&str], tags: &[&str]) -> Summary {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
    Summary {
        title: "T".to_owned(),
        summary: "S".to_owned(),
        key_points: owned(key_points),
        code_samples: owned(code_samples),
        tags: owned(tags),
        source_url: None,
    }
}

#[test]
fn all_empty_lists_show_no_optional_sections() {
    assert!(visible_sections(&summary_with(&[], &[], &[])).is_empty());
}

#[test]
fn populated_lists_show_in_display_order() {
    assert_eq!(
        visible_sections(&summary_with(&["p"], &["c"], &["t"])),
        vec![SummarySection::KeyPoints, SummarySection::CodeSamples, SummarySection::Tags]
    );
}

#[test]
fn each_empty_list_omits_only_its_section() {
    assert_eq!(
        visible_sections(&summary_with(&[], &["c"], &["t"])),
        vec![SummarySection::CodeSamples, SummarySection::Tags]
    );
    assert_eq!(
        visible_sections(&summary_with(&["p"], &[], &["t"])),
        vec![SummarySection::KeyPoints, SummarySection::Tags]
    );
    assert_eq!(visible_sections(&summary_with(&["p"], &["c"], &[])), vec![
        SummarySection::KeyPoints,
        SummarySection::CodeSamples
    ]);
}

#[test]
fn code_sample_labels_are_one_based() {
    assert_eq!(code_sample_label(0), "Code Sample 1");
    assert_eq!(code_sample_label(4), "Code Sample 5");
}

#[test]
fn source_link_label_includes_question_number() {
    assert_eq!(
        source_link_label("https://stackoverflow.com/questions/123/example"),
        "View Original (#123)"
    );
    assert_eq!(source_link_label("https://stackoverflow.com/q/abc"), "View Original");
}
