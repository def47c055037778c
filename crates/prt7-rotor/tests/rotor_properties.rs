//! ローターの性質テスト（proptest）

use std::collections::HashSet;

use prt7_rotor::{Rotor, ALPHABET, ALPHABET_LEN, LETTER_COUNT, SPACE};
use proptest::prelude::*;

fn rotor_at(start: i64) -> Rotor {
    let mut rotor = Rotor::new();
    rotor.rotate(start);
    rotor
}

proptest! {
    #[test]
    fn rotate_then_inverse_restores_offset(start in any::<i64>(), k in -1_000_000i64..1_000_000) {
        let mut rotor = rotor_at(start);
        let before = rotor.offset();
        rotor.rotate(k);
        rotor.rotate(-k);
        prop_assert_eq!(rotor.offset(), before);
    }

    #[test]
    fn rotate_is_equivalent_to_rotate_mod_27(start in any::<i64>(), k in any::<i64>()) {
        let mut direct = rotor_at(start);
        let mut reduced = rotor_at(start);
        direct.rotate(k);
        reduced.rotate(k % ALPHABET_LEN as i64);
        prop_assert_eq!(direct, reduced);
    }

    #[test]
    fn offset_is_always_canonical(steps in proptest::collection::vec(any::<i64>(), 0..20)) {
        let mut rotor = Rotor::new();
        for step in steps {
            rotor.rotate(step);
            prop_assert!(rotor.offset() < ALPHABET_LEN);
        }
    }

    #[test]
    fn map_is_bijection_on_letters(start in any::<i64>()) {
        let rotor = rotor_at(start);
        let images: HashSet<char> = ALPHABET[..LETTER_COUNT]
            .iter()
            .map(|&c| rotor.map(c))
            .collect();
        prop_assert_eq!(images.len(), LETTER_COUNT);
        prop_assert!(images.iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn space_is_fixed_point(start in any::<i64>()) {
        prop_assert_eq!(rotor_at(start).map(SPACE), SPACE);
    }

    #[test]
    fn lowercase_maps_like_uppercase(start in any::<i64>(), c in proptest::char::range('a', 'z')) {
        let rotor = rotor_at(start);
        prop_assert_eq!(rotor.map(c), rotor.map(c.to_ascii_uppercase()));
    }
}
