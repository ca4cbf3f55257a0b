use microcipher_core::rotor::stack::{Carry, RotorRole};
use microcipher_core::RotorStack;

#[test]
fn medium_lands_on_one_when_carrying_into_slow() {
    let mut s = RotorStack::from_offsets(25, 25, 0);

    // fast wraps, medium reaches 26 and holds there for one letter
    assert_eq!(s.step(), Carry::Medium);
    assert_eq!(s.raw(), [0, 26, 0]);
    assert_eq!(s.offsets(), [0, 0, 0]);

    // next letter carries into slow; medium is forced to 1, not 0
    assert_eq!(s.step(), Carry::Slow);
    assert_eq!(s.raw(), [1, 1, 1]);
}

#[test]
fn medium_advances_every_26_letters() {
    let mut s = RotorStack::default();
    for _ in 0..25 {
        assert_eq!(s.step(), Carry::None);
    }
    assert_eq!(s.step(), Carry::Medium);
    assert_eq!(s.raw(), [0, 1, 0]);
}

#[test]
fn full_medium_revolution_from_zero() {
    let mut s = RotorStack::default();
    for _ in 0..676 {
        s.step();
    }
    assert_eq!(s.raw(), [0, 26, 0]);

    s.step();
    assert_eq!(s.raw(), [1, 1, 1]);
    assert_eq!(s.offset(RotorRole::Medium), 1);
    assert_eq!(s.offset(RotorRole::Slow), 1);
}

#[test]
fn slow_wheel_wraps_mod_26() {
    let mut s = RotorStack::from_offsets(25, 25, 25);
    s.step();
    s.step();
    assert_eq!(s.raw(), [1, 1, 0]);
}

#[test]
fn offsets_stay_in_range_over_a_long_run() {
    let mut s = RotorStack::new(13, 24, 26).unwrap();
    for _ in 0..20_000 {
        s.step();
        let [f, m, sl] = s.offsets();
        assert!(f < 26 && m < 26 && sl < 26);
        let [_, raw_m, _] = s.raw();
        assert!(raw_m <= 26);
    }
}
