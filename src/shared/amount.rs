//! SUI amount utilities.
//!
//! Balances come back from the node in MIST, the base unit. One SUI is 1e9
//! MIST. Conversion to SUI is for display only; the exact MIST amount is
//! always shown next to it.

/// MIST per SUI (1e9).
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert a MIST amount to SUI.
///
/// # Example
///
/// ```
/// use sui_mint::shared::amount::mist_to_sui;
///
/// assert_eq!(mist_to_sui(1_500_000_000), 1.5);
/// ```
pub fn mist_to_sui(mist: u128) -> f64 {
    mist as f64 / MIST_PER_SUI as f64
}

/// Format a balance as `<sui> SUI (<mist> MIST)` with SUI rounded to two
/// decimal places.
///
/// Rounding follows JavaScript's `toFixed(2)`: it works on the exact value of
/// the `f64` and an exact tie goes to the larger result, so 0.125 SUI prints
/// as `0.13`.
pub fn format_balance(mist: u128) -> String {
    format!("{} SUI ({} MIST)", to_fixed_2(mist_to_sui(mist)), mist)
}

/// Two-decimal rendering of a non-negative `f64`, rounding half up on its
/// exact decimal expansion.
fn to_fixed_2(value: f64) -> String {
    // Finite doubles terminate well within this many fractional digits.
    let exact = format!("{:.1100}", value);
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<char> = whole.chars().chain(frac.chars().take(2)).collect();

    let round_up = frac.chars().nth(2).is_some_and(|d| d >= '5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, '1');
                break;
            }
            i -= 1;
            if digits[i] == '9' {
                digits[i] = '0';
            } else {
                digits[i] = char::from(digits[i] as u8 + 1);
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let int_part: String = digits[..split].iter().collect();
    let frac_part: String = digits[split..].iter().collect();
    format!("{}.{}", int_part, frac_part)
}
