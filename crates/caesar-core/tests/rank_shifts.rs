// crates/caesar-core/tests/rank_shifts.rs

use caesar_core::dist::reference::ENGLISH;
use caesar_core::rank::rank_shifts_n;
use caesar_core::{build_histogram, encrypt, rank_shifts, LetterDist, Metric, TOP_N};

const SAMPLE: &str = include_str!("../../../text/sample.txt");

#[test]
fn recovers_shift_seven_with_every_metric() {
    let cipher = encrypt(SAMPLE, 7);
    let h = build_histogram(&cipher);
    for m in Metric::ALL {
        let top = rank_shifts(&h, &ENGLISH, m);
        assert!(top.contains_shift(7), "metric={m} top={top:?}");
        assert_eq!(top[0].shift, 7, "metric={m} top={top:?}");
    }
}

#[test]
fn recovers_every_shift_with_chi_squared() {
    for s in 0..26u8 {
        let h = build_histogram(&encrypt(SAMPLE, s as i64));
        let top = rank_shifts(&h, &ENGLISH, Metric::ChiSquared);
        assert_eq!(top.best().and_then(|c| c.shift()), Some(s));
    }
}

#[test]
fn top_list_is_full_and_non_decreasing() {
    for text in [SAMPLE, "short", "", "!!!"] {
        let h = build_histogram(text);
        for m in Metric::ALL {
            let top = rank_shifts(&h, &ENGLISH, m);
            assert_eq!(top.as_slice().len(), TOP_N);
            assert_eq!(top.filled(), TOP_N, "metric={m} text={text:?}");
            for w in top.as_slice().windows(2) {
                assert!(w[0].distance <= w[1].distance, "metric={m} text={text:?}");
            }
        }
    }
}

#[test]
fn uniform_reference_ties_keep_lowest_shifts() {
    // Every rotation of a uniform reference is identical, so all 26 shifts tie.
    let reference = LetterDist([1.0 / 26.0; 26]);
    let h = build_histogram("hello world");
    for m in Metric::ALL {
        let top = rank_shifts(&h, &reference, m);
        let shifts: Vec<i32> = top.iter().map(|c| c.shift).collect();
        assert_eq!(shifts, vec![0, 1, 2], "metric={m}");
    }
}

#[test]
fn empty_histogram_cosine_ties_at_max_distance() {
    let top = rank_shifts(&LetterDist::ZERO, &ENGLISH, Metric::Cosine);
    let shifts: Vec<i32> = top.iter().map(|c| c.shift).collect();
    assert_eq!(shifts, vec![0, 1, 2]);
    assert!(top.iter().all(|c| c.distance == 1.0));
}

#[test]
fn nan_reference_leaves_sentinels() {
    let reference = LetterDist([f64::NAN; 26]);
    let h = build_histogram("abc");
    let top = rank_shifts(&h, &reference, Metric::Euclidean);
    assert_eq!(top.filled(), 0);
    assert!(top.iter().all(|c| c.is_sentinel() && c.shift().is_none()));
}

#[test]
fn wider_capacity_extends_the_same_ranking() {
    let h = build_histogram(&encrypt(SAMPLE, 11));
    let top3 = rank_shifts(&h, &ENGLISH, Metric::Euclidean);
    let top5 = rank_shifts_n::<5>(&h, &ENGLISH, Metric::Euclidean);
    assert_eq!(&top5.as_slice()[..3], top3.as_slice());
    assert_eq!(top5[0].shift, 11);
}

#[test]
fn rotated_reference_moves_letters_forward() {
    let r = ENGLISH.rotated(3);
    assert_eq!(r.get(3), ENGLISH.get(0));
    assert_eq!(r.get(2), ENGLISH.get(25));
    assert_eq!(ENGLISH.rotated(0), ENGLISH);
}
