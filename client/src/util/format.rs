//! Display formatting shared by listing cards and stat panels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits with commas, e.g. `15672` → `"15,672"`.
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Monthly rent label, e.g. `"$1,800/month"`.
pub fn monthly_price(price: u32) -> String {
    format!("${}/month", thousands(price))
}

/// `count` followed by `noun`, pluralized with a trailing `s`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

/// Host rating with one decimal place.
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}

/// Current UTC calendar year for the footer copyright line.
///
/// Server render and hydrated client both read UTC so the rendered text
/// matches across hydration.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
