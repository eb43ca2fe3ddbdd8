/// Render integer cents as a dollar string, e.g. 499 -> "$4.99".
pub fn format_usd(cents: i32) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(499), "$4.99");
        assert_eq!(format_usd(199900), "$1999.00");
        assert_eq!(format_usd(1_505), "$15.05");
    }
}
