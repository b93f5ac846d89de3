/// Formats a count with `'` between groups of three digits, e.g. `12'345`.
pub fn with_delimiters(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push('\'');
        }
        result.push(c);
    }
    result
}
