//! Форматирование чисел и сумм для таблиц.

/// Форматирует число с разделителями тысяч (пробелами)
pub fn format_number(n: i64) -> String {
    let negative = n < 0;
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    let digits: String = result.chars().rev().collect();
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Сумма в рублях: "1 234,56 ₽"
pub fn format_money(amount: f64) -> String {
    let kopecks = (amount * 100.0).round() as i64;
    let rubles = kopecks / 100;
    let rest = (kopecks % 100).abs();
    // знак уходит в рублёвую часть, у "-0,50" рубли нулевые
    if rubles == 0 && kopecks < 0 {
        format!("-0,{:02} ₽", rest)
    } else {
        format!("{},{:02} ₽", format_number(rubles), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1000), "1 000");
        assert_eq!(format_number(1234567), "1 234 567");
        assert_eq!(format_number(-1234), "-1 234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0,00 ₽");
        assert_eq!(format_money(1234.5), "1 234,50 ₽");
        assert_eq!(format_money(-0.5), "-0,50 ₽");
        assert_eq!(format_money(-1234.56), "-1 234,56 ₽");
    }
}
