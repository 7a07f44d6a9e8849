//! Форматирование дат для таблиц: ISO-строки сервера → короткий вид.

/// "2026-03-07T12:40:00Z" → "07.03.2026"
pub fn format_date(iso: &str) -> String {
    if let Some(date_part) = iso.split('T').next() {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{}", day, month, year);
            }
        }
    }
    iso.to_string()
}

/// "2026-03-07T12:40:00Z" → "07.03.2026 12:40"
pub fn format_datetime(iso: &str) -> String {
    let Some((date_part, time_part)) = iso.split_once('T') else {
        return format_date(iso);
    };
    let time = time_part
        .trim_end_matches('Z')
        .split(':')
        .take(2)
        .collect::<Vec<_>>()
        .join(":");
    if time.is_empty() {
        format_date(date_part)
    } else {
        format!("{} {}", format_date(date_part), time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-07T12:40:00Z"), "07.03.2026");
        assert_eq!(format_date("2026-03-07"), "07.03.2026");
        // не дата — возвращаем как есть
        assert_eq!(format_date("вчера"), "вчера");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-03-07T12:40:00Z"), "07.03.2026 12:40");
        assert_eq!(format_datetime("2026-03-07"), "07.03.2026");
    }
}
