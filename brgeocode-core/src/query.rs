use crate::entities::{non_empty, Address, NO_NUMBER};

/// The provider only resolves house numbers in this city
/// if they keep their hyphen.
const CITY_WITH_HYPHENATED_NUMBERS: &str = "Bauru";

const SEGMENT_SEPARATOR: &str = ", ";

/// Composes the free-form address query understood by the provider.
pub fn address_to_forward_query_string(addr: &Address) -> String {
    address_segments(addr).join(SEGMENT_SEPARATOR)
}

fn address_segments(addr: &Address) -> Vec<String> {
    let number = addr.number.as_deref().map(str::to_uppercase);
    let number = non_empty(&number).filter(|n| *n != NO_NUMBER);

    let street = non_empty(&addr.street);
    let neighborhood = non_empty(&addr.neighborhood);
    let city = non_empty(&addr.city);
    let state = non_empty(&addr.state);

    let mut segments = Vec::with_capacity(6);
    match (street, number, neighborhood, city, state) {
        (Some(street), Some(number), Some(neighborhood), Some(city), Some(state)) => {
            let number = if city == CITY_WITH_HYPHENATED_NUMBERS {
                number.to_owned()
            } else {
                number.replace('-', "")
            };
            segments.extend([
                street.to_owned(),
                number,
                city.to_owned(),
                neighborhood.to_owned(),
                state.to_owned(),
            ]);
        }
        (Some(street), _, _, Some(city), _) => {
            segments.extend(
                [
                    Some(city),
                    Some(street),
                    addr.neighborhood.as_deref(),
                    addr.zip.as_deref(),
                    addr.state.as_deref(),
                ]
                .into_iter()
                .map(|s| s.unwrap_or_default().to_owned()),
            );
        }
        _ => {}
    }
    segments.push(addr.country.clone().unwrap_or_default());
    segments
}
