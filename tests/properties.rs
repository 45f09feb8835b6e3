use proptest::prelude::*;
use tabula::alphabet::{Alphabet, SymbolClass};
use tabula::cipher::shift::ShiftTable;
use tabula::cipher::{shift, vernam, vigenere};

proptest! {
    #[test]
    fn caesar_round_trips_any_text(text in "\\PC*", key in -1000i64..1000) {
        prop_assert_eq!(shift::decode(&shift::encode(&text, key), key), text);
    }

    #[test]
    fn vigenere_round_trips_any_text(text in "\\PC*", keyword in "[a-zA-Z0-9]{1,16}") {
        let encoded = vigenere::encode(&text, &keyword).unwrap();
        prop_assert_eq!(vigenere::decode(&encoded, &keyword).unwrap(), text);
    }

    #[test]
    fn vernam_double_encode_is_identity(text in "[ -~]*", keyword in "[ -~]{1,16}") {
        // ASCII operands keep every XOR below 0x80, so combine cannot fail
        let encoded = vernam::encode(&text, &keyword).unwrap();
        prop_assert_eq!(vernam::encode(&encoded, &keyword).unwrap(), text);
    }

    #[test]
    fn reverse_table_inverts_forward_table(key in -500i64..500) {
        for class in [
            SymbolClass::Lower,
            SymbolClass::Upper,
            SymbolClass::Digit,
            SymbolClass::Punctuation,
        ] {
            let alphabet = Alphabet::for_class(class).unwrap();
            let forward = ShiftTable::build(&alphabet, key);
            let reverse = ShiftTable::build_reverse(&alphabet, key);
            for symbol in alphabet.symbols() {
                let mapped = forward.substitute(symbol).unwrap();
                prop_assert_eq!(reverse.substitute(mapped), Some(symbol));
            }
        }
    }

    #[test]
    fn caesar_leaves_unrecognized_text_unchanged(text in "[ \\t\\r\\n]*", key in -100i64..100) {
        prop_assert_eq!(shift::encode(&text, key), text);
    }

    #[test]
    fn frequency_buckets_sum_to_one_for_classified_text(text in "[a-zA-Z0-9 ]{1,256}") {
        let distribution = tabula::FrequencyDistribution::of(&text).unwrap();
        let sum: f64 = distribution.values().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }
}
