use super::*;

#[test]
fn thousands_groups_digits() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(750), "750");
    assert_eq!(thousands(1800), "1,800");
    assert_eq!(thousands(15_672), "15,672");
    assert_eq!(thousands(1_234_567), "1,234,567");
}

#[test]
fn monthly_price_prefixes_dollar() {
    assert_eq!(monthly_price(2200), "$2,200/month");
}

#[test]
fn plural_adds_suffix_except_for_one() {
    assert_eq!(plural(0, "listing"), "0 listings");
    assert_eq!(plural(1, "listing"), "1 listing");
    assert_eq!(plural(3, "saved listing"), "3 saved listings");
}

#[test]
fn rating_keeps_one_decimal() {
    assert_eq!(rating(4.8), "4.8");
    assert_eq!(rating(5.0), "5.0");
}

#[test]
fn current_year_is_the_utc_year() {
    let year = current_year();
    assert!(year >= 2024);
    assert_eq!(year, time::OffsetDateTime::now_utc().year());
}
