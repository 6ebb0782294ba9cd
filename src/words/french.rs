use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::core::{FactureError, round_money};

/// Largest magnitude [`amount_to_words`] accepts.
pub const MAX_WORDS_AMOUNT: Decimal = dec!(999_999_999_999.99);

/// Largest integer [`spell_integer`] accepts.
pub const MAX_WORDS_INTEGER: u64 = 999_999_999_999;

/// Output for a zero amount. Kept lower-case.
pub const ZERO_AMOUNT: &str = "zéro dinar algérien";

const UNITS: [&str; 20] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit", "dix-neuf",
];

const TENS: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

/// Scales above the thousands, largest first: (size, singular, plural).
const SCALES: [(u64, &str, &str); 2] = [
    (1_000_000_000, "milliard", "milliards"),
    (1_000_000, "million", "millions"),
];

/// Render an amount in dinars as French prose.
///
/// ```
/// use facture::words::amount_to_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     amount_to_words(dec!(1201.90)).unwrap(),
///     "Mille deux cent un dinars algériens et quatre-vingt-dix centimes"
/// );
/// ```
///
/// # Errors
///
/// [`FactureError::AmountOutOfRange`] when the magnitude exceeds
/// [`MAX_WORDS_AMOUNT`].
pub fn amount_to_words(amount: Decimal) -> Result<String, FactureError> {
    let rounded = round_money(amount);
    let magnitude = rounded.abs();
    if magnitude > MAX_WORDS_AMOUNT {
        return Err(out_of_range(amount));
    }
    if magnitude.is_zero() {
        return Ok(ZERO_AMOUNT.to_string());
    }

    let dinars = magnitude.trunc().to_u64().ok_or_else(|| out_of_range(amount))?;
    let centimes = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_u64()
        .ok_or_else(|| out_of_range(amount))?;

    let mut words = String::new();
    if rounded.is_sign_negative() {
        words.push_str("moins ");
    }
    words.push_str(&spell(dinars));
    words.push_str(if dinars == 1 {
        " dinar algérien"
    } else {
        " dinars algériens"
    });

    if centimes > 0 {
        words.push_str(" et ");
        words.push_str(&spell(centimes));
        words.push_str(if centimes == 1 { " centime" } else { " centimes" });
    }

    Ok(capitalize(&words))
}

/// Spell an integer in French, lower-case, e.g. `-71` → "moins soixante-et-onze".
pub fn spell_integer(n: i64) -> Result<String, FactureError> {
    let magnitude = n.unsigned_abs();
    if magnitude > MAX_WORDS_INTEGER {
        return Err(out_of_range(Decimal::from(n)));
    }
    if n < 0 {
        Ok(format!("moins {}", spell(magnitude)))
    } else {
        Ok(spell(magnitude))
    }
}

fn out_of_range(amount: Decimal) -> FactureError {
    FactureError::AmountOutOfRange {
        amount,
        max: MAX_WORDS_AMOUNT,
    }
}

/// `n` must not exceed [`MAX_WORDS_INTEGER`].
fn spell(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut parts = Vec::new();
    let mut rest = n;

    for (size, singular, plural) in SCALES {
        let count = rest / size;
        if count > 0 {
            let noun = if count == 1 { singular } else { plural };
            parts.push(format!("{} {noun}", below_thousand(count)));
            rest %= size;
        }
    }

    // "mille" is invariable and takes no "un".
    let thousands = rest / 1000;
    match thousands {
        0 => {}
        1 => parts.push("mille".to_string()),
        k => parts.push(format!("{} mille", below_thousand(k))),
    }
    rest %= 1000;

    if rest > 0 {
        parts.push(below_thousand(rest));
    }

    parts.join(" ")
}

fn below_thousand(n: u64) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (1, 0) => "cent".to_string(),
        (1, r) => format!("cent {}", below_hundred(r)),
        (h, 0) => format!("{} cents", UNITS[h as usize]),
        (h, r) => format!("{} cent {}", UNITS[h as usize], below_hundred(r)),
    }
}

fn below_hundred(n: u64) -> String {
    let n = n as usize;
    match n {
        0..=19 => UNITS[n].to_string(),
        20..=69 => {
            let tens = TENS[n / 10];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens}-et-un"),
                u => format!("{tens}-{}", UNITS[u]),
            }
        }
        71 => "soixante-et-onze".to_string(),
        70..=79 => format!("soixante-{}", UNITS[n - 60]),
        80 => "quatre-vingts".to_string(),
        _ => format!("quatre-vingt-{}", UNITS[n - 80]),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
