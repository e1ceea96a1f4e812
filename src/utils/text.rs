/// 將文字置中至指定寬度；空白數為奇數時左側多一格，過長則截斷
pub fn adjust_text(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length < width {
        let required_spaces = width - length;
        let spaces_on_left = (required_spaces + 1) / 2;
        let spaces_on_right = required_spaces / 2;
        format!(
            "{}{}{}",
            " ".repeat(spaces_on_left),
            text,
            " ".repeat(spaces_on_right)
        )
    } else {
        text.chars().take(width).collect()
    }
}

/// 以最小貨幣單位格式化金額，例如 123456 -> "1 234,56"
pub fn format_money(minor_units: u64) -> String {
    format!(
        "{},{:02}",
        group_thousands(minor_units / 100),
        minor_units % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}
