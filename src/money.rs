/// 통화 기호를 앞에 붙이고 소수 둘째 자리까지 표시한다.
///
/// 천 단위 구분자는 넣지 않는다. 유한하지 않은 값은 그대로 출력한다.
pub fn format_money(currency_symbol: &str, value: f64) -> String {
    if value.is_finite() {
        format!("{currency_symbol}{value:.2}")
    } else {
        format!("{currency_symbol}{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fraction_digits() {
        assert_eq!(format_money("£", 584.59), "£584.59");
        assert_eq!(format_money("£", 125000.0), "£125000.00");
        assert_eq!(format_money("$", 0.5), "$0.50");
    }

    #[test]
    fn non_finite_as_is() {
        assert_eq!(format_money("£", f64::INFINITY), "£inf");
        assert_eq!(format_money("£", f64::NAN), "£NaN");
    }
}
