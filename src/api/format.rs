/// Default numeric label formatter: shortest round-trip decimal form, with
/// negative zero normalized. Integral values carry no decimal point.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}
