//! 分类器性质测试
//!
//! - 任意切分方式送入同一字节序列，关闭的行边界总数与最终类型一致（无需前瞻）。
//! - Mixed 一旦出现，后续任何输入都不会使其回退。
//! - 每个字节关闭的边界数只可能是 0、1、2。

use linedump_core::{LineClassifier, LineEndingStyle};
use proptest::prelude::*;

/// 偏向换行符的字节生成器，增加 0D/0A 组合的命中率
fn line_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(0x0Du8), Just(0x0Au8), any::<u8>()], 0..256)
}

proptest! {
    #[test]
    fn prop_split_feeding_matches_whole(bytes in line_bytes(), cuts in prop::collection::vec(any::<usize>(), 0..8)) {
        let mut whole = LineClassifier::new();
        let total_whole = whole.feed(&bytes);

        let mut points: Vec<usize> = cuts.into_iter().map(|c| if bytes.is_empty() { 0 } else { c % bytes.len() }).collect();
        points.sort_unstable();
        let mut split = LineClassifier::new();
        let mut total_split = 0;
        let mut start = 0;
        for p in points.into_iter().chain(std::iter::once(bytes.len())) {
            total_split += split.feed(&bytes[start..p.max(start)]);
            start = p.max(start);
        }

        prop_assert_eq!(total_whole, total_split);
        prop_assert_eq!(whole.style(), split.style());
        prop_assert_eq!(whole.pending_cr(), split.pending_cr());
    }

    #[test]
    fn prop_mixed_never_reverts(tail in line_bytes()) {
        let mut c = LineClassifier::new();
        c.feed(b"a\r\nb\n");
        prop_assert_eq!(c.style(), LineEndingStyle::Mixed);
        for b in tail {
            c.handle(b);
            let _ = c.acquire_and_reset_closed_count();
            prop_assert_eq!(c.style(), LineEndingStyle::Mixed);
        }
        c.finish();
        prop_assert_eq!(c.style(), LineEndingStyle::Mixed);
    }

    #[test]
    fn prop_per_byte_count_is_bounded(bytes in line_bytes()) {
        let mut c = LineClassifier::new();
        for b in bytes {
            c.handle(b);
            prop_assert!(c.acquire_and_reset_closed_count() <= 2);
        }
    }

    #[test]
    fn prop_plain_text_has_no_boundaries(bytes in prop::collection::vec(any::<u8>().prop_filter("no terminators", |b| *b != 0x0D && *b != 0x0A), 0..128)) {
        let mut c = LineClassifier::new();
        prop_assert_eq!(c.feed(&bytes), 0);
        c.finish();
        prop_assert_eq!(c.acquire_and_reset_closed_count(), 0);
        prop_assert_eq!(c.style(), LineEndingStyle::Undefined);
    }
}

#[test]
fn crlf_two_calls_equals_one_batch() {
    let mut split = LineClassifier::new();
    split.handle(0x0D);
    let first = split.acquire_and_reset_closed_count();
    split.handle(0x0A);
    let second = split.acquire_and_reset_closed_count();

    let mut batch = LineClassifier::new();
    assert_eq!(first + second, batch.feed(&[0x0D, 0x0A]));
    assert_eq!(first + second, 1);
    assert_eq!(split.style(), LineEndingStyle::CrLf);
    assert_eq!(batch.style(), LineEndingStyle::CrLf);
}

#[test]
fn double_cr_counts_two() {
    let mut c = LineClassifier::new();
    assert_eq!(c.feed(&[0x0D, 0x0D]), 2);
    assert_eq!(c.style(), LineEndingStyle::Lf);
}
