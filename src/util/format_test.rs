use super::*;

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(450_000), "$4,500.00");
    assert_eq!(format_currency(620_000), "$6,200.00");
    assert_eq!(format_currency(123_456_789), "$1,234,567.89");
}

#[test]
fn format_currency_handles_small_and_negative_amounts() {
    assert_eq!(format_currency(0), "$0.00");
    assert_eq!(format_currency(5), "$0.05");
    assert_eq!(format_currency(-250_050), "-$2,500.50");
}

#[test]
fn format_file_size_zero_is_spelled_out() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn format_file_size_picks_binary_units() {
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1_536), "1.5 KB");
    assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn format_file_size_trims_trailing_zeros() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1_126), "1.1 KB");
}
