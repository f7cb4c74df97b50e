//! 사용자가 입력한 숫자 토큰의 엄격한 검증.
//!
//! 토큰은 파싱한 값을 다시 문자열로 되돌렸을 때 원래 토큰과 정확히 같아야만
//! 숫자로 인정한다. 따라서 `"007"`(정규형 `"7"`)이나 `"1.50"`(정규형 `"1.5"`)은
//! 값으로는 양수여도 거부된다.

/// 고정 소수점 표기를 유지하는 최대 소수점 위치(정수부 자릿수).
const FIXED_MAX_DECPT: i32 = 16;
/// 이 값보다 작은 소수점 위치부터는 지수 표기로 바뀐다.
const FIXED_MIN_DECPT: i32 = -4;

/// 토큰이 정규형 정수 표기인지 확인한다.
///
/// 부호는 `-`만 허용하고, 선행 0·공백·후행 문자는 모두 거부한다.
/// 기계 정수 범위를 넘는 자릿수도 같은 규칙으로 판단한다.
pub fn is_valid_integer(text: &str) -> bool {
    match text.parse::<i128>() {
        Ok(n) => n.to_string() == text,
        Err(e) => match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                is_canonical_digit_run(text)
            }
            _ => false,
        },
    }
}

fn is_canonical_digit_run(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && !digits.starts_with('0')
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 토큰이 정규형 실수 표기인지 확인한다.
pub fn is_valid_float(text: &str) -> bool {
    text.parse::<f64>()
        .ok()
        .and_then(canonical_float)
        .is_some_and(|canonical| canonical == text)
}

/// 실수를 정규형 문자열로 만든다. 유한하지 않은 값은 정규형이 없다.
///
/// 왕복 가능한 최단 자릿수를 사용하며, 배치 규칙은 다음과 같다.
///
/// - 소수점이 앞 16자리 안에 오면 고정 표기, 소수부는 최소 한 자리 (`1000.0`)
/// - `1e-4` 이상의 작은 값은 `0.000ddd` 형태 (`0.0001`)
/// - 그 밖에는 `d.ddde±XX` 형태, 지수는 최소 두 자리 (`1.0e+16`, `1.0e-05`)
pub fn canonical_float(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let decpt = exponent + 1;

    let body = if decpt > 0 && decpt <= FIXED_MAX_DECPT {
        let point = decpt as usize;
        if digits.len() <= point {
            format!("{digits}{}.0", "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    } else if decpt <= 0 && decpt > FIXED_MIN_DECPT {
        format!("0.{}{digits}", "0".repeat(decpt.unsigned_abs() as usize))
    } else {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{head}.{tail}e{sign}{:02}", exponent.unsigned_abs())
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    Some(format!("{sign}{body}"))
}

/// 정수 또는 실수 정규형이면서 범위 조건을 만족하는지 확인한다.
///
/// `allow_zero`가 거짓이면 `> 0`, 참이면 `>= 0`을 요구한다.
pub fn is_valid_number(text: &str, allow_zero: bool) -> bool {
    parse_number(text, allow_zero).is_some()
}

/// 검증을 통과한 토큰의 값을 돌려준다. 통과하지 못하면 `None`.
///
/// f64로 표현할 수 없을 만큼 큰 정수 토큰은 범위 밖으로 본다.
pub fn parse_number(text: &str, allow_zero: bool) -> Option<f64> {
    if !(is_valid_integer(text) || is_valid_float(text)) {
        return None;
    }
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    in_range.then_some(value)
}
