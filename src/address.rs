use crate::geocoder::Placemark;

/// The two display lines derived from a placemark.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressLines {
    pub line1: String,
    pub line2: String,
}

/// Builds the two address label strings from a placemark.
///
/// Line 1 is "street-number street-name", line 2 is "city state postal-code";
/// each segment is appended only when present, with a single space after it.
/// Line 2 keeps a trailing space when the postal code is absent; that quirk is
/// intentional and covered by tests.
pub fn address_lines(placemark: &Placemark) -> AddressLines {
    let mut line1 = String::new();
    if let Some(street_number) = &placemark.street_number {
        line1.push_str(street_number);
        line1.push(' ');
    }
    if let Some(street_name) = &placemark.street_name {
        line1.push_str(street_name);
    }

    let mut line2 = String::new();
    if let Some(city) = &placemark.city {
        line2.push_str(city);
        line2.push(' ');
    }
    if let Some(state) = &placemark.state {
        line2.push_str(state);
        line2.push(' ');
    }
    if let Some(postal_code) = &placemark.postal_code {
        line2.push_str(postal_code);
    }

    AddressLines { line1, line2 }
}
