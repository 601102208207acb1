//! Conversion of stored strings into typed values
//!
//! Conversions never fail. Empty or unparsable input yields the type's zero value
//! ([Default]), which is also what a read past the last stored value converts from.
//!
//! Rules:
//!     Integers: base 10. Leading whitespace is skipped, then an optional sign (`-` only for
//!         signed types), then the longest run of ASCII digits. Trailing text is ignored, so
//!         `"12abc"` is 12. Out of range values saturate.
//!     Floats: the longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]`.
//!     bool: case-insensitive. `0`, `false`, `no`, `disable`, `disabled` and the empty string
//!         are false, anything else is true.
//!     char: the first non-whitespace character.
//!     String: the stored text as is.

use std::num::IntErrorKind;

/// Types that can be extracted from a stored value
pub trait FromValue: Default {
    fn from_value(raw: &str) -> Self;
}

/// Sign and digits at the start of `raw`, or "" if there are no digits
fn integer_prefix(raw: &str, allow_minus: bool) -> &str {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if let Some(&first) = bytes.first() {
        if first == b'+' || (allow_minus && first == b'-') {
            end = 1;
        }
    }
    let digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return "";
    }
    &s[..end + digits]
}

/// The longest float literal at the start of `raw`, or "" if there is none
fn float_prefix(raw: &str) -> &str {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

macro_rules! impl_from_value_int {
    ($signed:expr => $($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(raw: &str) -> Self {
                    let digits = integer_prefix(raw, $signed);
                    if digits.is_empty() {
                        return 0;
                    }
                    match digits.parse::<$ty>() {
                        Ok(value) => value,
                        Err(err) => match err.kind() {
                            IntErrorKind::PosOverflow => <$ty>::MAX,
                            IntErrorKind::NegOverflow => <$ty>::MIN,
                            _ => 0,
                        },
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(true => i8, i16, i32, i64, i128, isize);
impl_from_value_int!(false => u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_value_float {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(raw: &str) -> Self {
                    float_prefix(raw).parse::<$ty>().unwrap_or(0.0)
                }
            }
        )*
    };
}

impl_from_value_float!(f32, f64);

impl FromValue for bool {
    fn from_value(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        !matches!(
            lowered.as_str(),
            "" | "0" | "false" | "no" | "disable" | "disabled"
        )
    }
}

impl FromValue for char {
    fn from_value(raw: &str) -> Self {
        raw.trim_start().chars().next().unwrap_or('\0')
    }
}

impl FromValue for String {
    fn from_value(raw: &str) -> Self {
        raw.to_string()
    }
}
