#![cfg(feature = "words")]

use facture::FactureError;
use facture::words::*;
use rust_decimal_macros::dec;

fn words(amount: rust_decimal::Decimal) -> String {
    amount_to_words(amount).unwrap()
}

// --- Reference vectors ---

#[test]
fn zero_is_lower_case() {
    assert_eq!(words(dec!(0)), "zéro dinar algérien");
    assert_eq!(words(dec!(0.00)), "zéro dinar algérien");
    assert_eq!(words(dec!(0.004)), "zéro dinar algérien");
}

#[test]
fn reference_vectors() {
    assert_eq!(words(dec!(1)), "Un dinar algérien");
    assert_eq!(words(dec!(71)), "Soixante-et-onze dinars algériens");
    assert_eq!(words(dec!(80)), "Quatre-vingts dinars algériens");
    assert_eq!(words(dec!(91)), "Quatre-vingt-onze dinars algériens");
    assert_eq!(words(dec!(1000000)), "Un million dinars algériens");
}

#[test]
fn et_un_only_below_seventy() {
    assert_eq!(words(dec!(21)), "Vingt-et-un dinars algériens");
    assert_eq!(words(dec!(31)), "Trente-et-un dinars algériens");
    assert_eq!(words(dec!(81)), "Quatre-vingt-un dinars algériens");
}

#[test]
fn hundreds_plural_rule() {
    assert_eq!(words(dec!(100)), "Cent dinars algériens");
    assert_eq!(words(dec!(200)), "Deux cents dinars algériens");
    assert_eq!(words(dec!(201)), "Deux cent un dinars algériens");
}

#[test]
fn mille_is_invariable() {
    assert_eq!(words(dec!(1000)), "Mille dinars algériens");
    assert_eq!(words(dec!(3000)), "Trois mille dinars algériens");
}

#[test]
fn millions_and_milliards_pluralize() {
    assert_eq!(words(dec!(2000000)), "Deux millions dinars algériens");
    assert_eq!(words(dec!(1000000000)), "Un milliard dinars algériens");
    assert_eq!(words(dec!(4000000000)), "Quatre milliards dinars algériens");
}

// --- Centimes ---

#[test]
fn single_centime() {
    assert_eq!(words(dec!(0.01)), "Zéro dinars algériens et un centime");
}

#[test]
fn dinar_and_centimes() {
    assert_eq!(words(dec!(1.50)), "Un dinar algérien et cinquante centimes");
}

#[test]
fn centimes_round_half_away_from_zero() {
    assert_eq!(words(dec!(2.005)), "Deux dinars algériens et un centime");
    assert_eq!(words(dec!(0.999)), "Un dinar algérien");
}

// --- Snapshots of full invoice totals ---

#[test]
fn snapshot_invoice_total() {
    insta::assert_snapshot!(
        words(dec!(1234567.89)),
        @"Un million deux cent trente-quatre mille cinq cent soixante-sept dinars algériens et quatre-vingt-neuf centimes"
    );
}

#[test]
fn snapshot_stamped_total() {
    insta::assert_snapshot!(
        words(dec!(124144.15)),
        @"Cent vingt-quatre mille cent quarante-quatre dinars algériens et quinze centimes"
    );
}

#[test]
fn snapshot_largest_amount() {
    insta::assert_snapshot!(
        words(MAX_WORDS_AMOUNT),
        @"Neuf cent quatre-vingt-dix-neuf milliards neuf cent quatre-vingt-dix-neuf millions neuf cent quatre-vingt-dix-neuf mille neuf cent quatre-vingt-dix-neuf dinars algériens et quatre-vingt-dix-neuf centimes"
    );
}

// --- Sign and range ---

#[test]
fn negative_amounts() {
    assert_eq!(words(dec!(-1)), "Moins un dinar algérien");
    assert_eq!(words(dec!(-71.01)), "Moins soixante-et-onze dinars algériens et un centime");
}

#[test]
fn out_of_range_is_an_error() {
    let err = amount_to_words(dec!(1000000000000)).unwrap_err();
    assert!(matches!(err, FactureError::AmountOutOfRange { .. }));
    assert!(amount_to_words(dec!(-1000000000000)).is_err());
    // rounds up past the bound
    assert!(amount_to_words(dec!(999999999999.996)).is_err());
}

#[test]
fn spell_integer_is_lower_case() {
    assert_eq!(spell_integer(1999).unwrap(), "mille neuf cent quatre-vingt-dix-neuf");
    assert!(spell_integer(MAX_WORDS_INTEGER as i64 + 1).is_err());
}
