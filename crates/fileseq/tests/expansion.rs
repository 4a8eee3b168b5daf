//! Behavioural agreement between the eager and lazy expanders.

use fileseq::{EagerSequence, LazySequence, Pattern, PathSequence, SequenceOptions};
use rstest::rstest;

#[rstest]
#[case("1-5#.exr")]
#[case("5-1#.exr")]
#[case("1-10x2@.exr")]
#[case("1,3,5#.exr")]
#[case("-2-1@@.exr")]
#[case("1-2@/img.10-11@@.png")]
#[case("a/@.exr")]
#[case("1-3@,100-101#.dpx")]
#[case("frame.exr")]
#[case("1-#.exr")]
#[case("7-7@.exr")]
#[case("")]
fn eager_and_lazy_agree_everywhere(#[case] pattern: &str) {
    let eager = EagerSequence::new(pattern);
    let lazy = LazySequence::new(pattern);

    assert_eq!(eager.is_ok(), lazy.is_ok(), "is_ok for {pattern:?}");
    assert_eq!(eager.len(), lazy.len(), "len for {pattern:?}");
    for index in 0..eager.len() {
        assert_eq!(
            eager.path(index),
            lazy.path(index),
            "path {index} for {pattern:?}"
        );
    }
    assert_eq!(eager.full_paths(), lazy.full_paths(), "paths for {pattern:?}");
}

#[rstest]
#[case("1-5#.exr", &["0001.exr", "0002.exr", "0003.exr", "0004.exr", "0005.exr"])]
#[case("5-1#.exr", &["0005.exr", "0004.exr", "0003.exr", "0002.exr", "0001.exr"])]
#[case("1-10x2@.exr", &["1.exr", "3.exr", "5.exr", "7.exr", "9.exr"])]
#[case("-2-1@@.exr", &["-2.exr", "-1.exr", "00.exr", "01.exr"])]
#[case("1-2@/img.10-11@@.png", &["1/img.10.png", "1/img.11.png", "2/img.10.png", "2/img.11.png"])]
fn expands_to_the_expected_paths(#[case] pattern: &str, #[case] expected: &[&str]) {
    assert_eq!(EagerSequence::new(pattern).full_paths(), expected);
    assert_eq!(LazySequence::new(pattern).full_paths(), expected);
}

#[rstest]
#[case("frame.exr")]
#[case("1-#.exr")]
#[case("7-7@.exr")]
#[case("1,,3.exr")]
#[case("1,3,.exr")]
#[case("")]
fn degenerate_patterns_report_not_ok(#[case] pattern: &str) {
    let eager = EagerSequence::new(pattern);
    let lazy = LazySequence::new(pattern);
    assert!(!eager.is_ok(), "{pattern:?}");
    assert_eq!(eager.len(), 0);
    assert!(!lazy.is_ok(), "{pattern:?}");
    assert_eq!(lazy.len(), 0);
}

/// Re-parsing any produced path (which contains no sequence syntax) yields a
/// degenerate single-path sequence equal to that path.
#[test]
fn produced_paths_reparse_as_single_paths() {
    let sequence = EagerSequence::new("shot/beauty.1-3#.exr");
    for path in &sequence {
        let reparsed = EagerSequence::new(path);
        assert!(!reparsed.is_ok());
        assert_eq!(reparsed.len(), 0);
        assert_eq!(reparsed.paths(), [path.as_str()]);
    }
}

#[rstest]
#[case("shot/beauty.1-5#.exr")]
#[case("1-#.exr")]
#[case("...")]
#[case("plain")]
fn tokenization_round_trips(#[case] pattern: &str) {
    assert_eq!(Pattern::parse(pattern, "", '0').reconstruct(), pattern);
}

#[test]
fn options_apply_to_both_expanders() {
    let options = SequenceOptions::default()
        .with_delimiters("_")
        .with_pad_char(' ');
    let eager = EagerSequence::with_options("f_8-11@@_tail", &options);
    let lazy = LazySequence::with_options("f_8-11@@_tail", &options);
    let expected = [
        "f_ 8_tail",
        "f_ 9_tail",
        "f_10_tail",
        "f_11_tail",
    ];
    assert_eq!(eager.full_paths(), expected);
    assert_eq!(lazy.full_paths(), expected);
}

#[test]
fn lazy_iteration_matches_indexed_access() {
    let lazy = LazySequence::new("1-3@.2-3@");
    let iterated: Vec<String> = lazy.iter().collect();
    let indexed: Vec<String> = (0..lazy.len()).filter_map(|i| lazy.get(i)).collect();
    assert_eq!(iterated, indexed);
    assert_eq!(iterated.len(), 6);
}
