use super::prelude::*;
use crate::query::address_to_forward_query_string;

/// Position of a lookup within a single top-level call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    First,
    /// Repeated lookup without street and number.
    Retry,
}

/// Resolves the coordinates of an address.
///
/// If the provider finds nothing, the lookup is repeated
/// once without street and number.
pub fn find_location<G>(
    gateway: &G,
    api_key: Option<&str>,
    addr: &Address,
) -> Result<Coordinates>
where
    G: GeoCodingGateway + ?Sized,
{
    find_location_attempt(gateway, api_key, addr, Attempt::First)
}

fn find_location_attempt<G>(
    gateway: &G,
    api_key: Option<&str>,
    addr: &Address,
    attempt: Attempt,
) -> Result<Coordinates>
where
    G: GeoCodingGateway + ?Sized,
{
    let api_key = validate(api_key, addr)?;
    let query = address_to_forward_query_string(addr);
    log::debug!("Resolving address '{query}' ({attempt:?})");
    let GeocodeResponse { status, location } = gateway.forward(&query, api_key)?;
    match status {
        Status::Ok => {
            let location = location.ok_or(Error::NotFound)?;
            log::debug!("Resolved address '{query}': {location}");
            Ok(location)
        }
        Status::OverQueryLimit => {
            log::warn!("Geocoding query limit exceeded");
            Err(Error::QuotaExceeded)
        }
        Status::ZeroResults => match attempt {
            Attempt::First => {
                log::debug!("No results for '{query}': retry without street and number");
                let reduced = addr.without_street_and_number();
                find_location_attempt(gateway, Some(api_key), &reduced, Attempt::Retry)
            }
            Attempt::Retry => Err(Error::NotFound),
        },
        Status::Other(status) => {
            log::warn!("Unexpected geocoding status '{status}' for '{query}'");
            Err(Error::NotFound)
        }
    }
}

fn validate<'a>(api_key: Option<&'a str>, addr: &Address) -> Result<&'a str> {
    let api_key = api_key
        .filter(|k| !k.is_empty())
        .ok_or(Error::MissingApiKey)?;
    if non_empty(&addr.city).is_none() && non_empty(&addr.state).is_none() {
        return Err(Error::MissingLocation);
    }
    Ok(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    const KEY: Option<&str> = Some("secret");

    fn address() -> Address {
        Address {
            street: Some("Rua X".into()),
            number: Some("123-45".into()),
            neighborhood: Some("Centro".into()),
            city: Some("Bauru".into()),
            state: Some("SP".into()),
            zip: Some("17010-000".into()),
            country: Some("Brasil".into()),
        }
    }

    #[test]
    fn missing_api_key() {
        let gw = MockGateway::default();
        for addr in [address(), Address::default()] {
            assert!(matches!(
                find_location(&gw, None, &addr),
                Err(Error::MissingApiKey)
            ));
            assert!(matches!(
                find_location(&gw, Some(""), &addr),
                Err(Error::MissingApiKey)
            ));
        }
        assert!(gw.requests().is_empty());
    }

    #[test]
    fn missing_city_and_state() {
        let gw = MockGateway::default();
        let addr = Address {
            city: Some("".into()),
            state: None,
            ..address()
        };
        assert!(matches!(
            find_location(&gw, KEY, &addr),
            Err(Error::MissingLocation)
        ));
        assert!(gw.requests().is_empty());
    }

    #[test]
    fn city_or_state_is_sufficient() {
        let gw = MockGateway::with_responses([ok("-22.3", "-49.1"), ok("-22.3", "-49.1")]);
        let only_state = Address {
            city: None,
            ..address()
        };
        assert!(find_location(&gw, KEY, &only_state).is_ok());
        let only_city = Address {
            state: None,
            ..address()
        };
        assert!(find_location(&gw, KEY, &only_city).is_ok());
    }

    #[test]
    fn pass_through_location() {
        let gw = MockGateway::with_responses([ok("-22.3", "-49.1")]);
        let location = find_location(&gw, KEY, &address()).unwrap();
        assert_eq!(location, Coordinates::new("-22.3", "-49.1"));
        assert_eq!(
            gw.requests(),
            vec![(
                "Rua X, 123-45, Bauru, Centro, SP, Brasil".to_string(),
                "secret".to_string()
            )]
        );
    }

    #[test]
    fn ok_without_results() {
        let gw = MockGateway::with_responses([GeocodeResponse {
            status: Status::Ok,
            location: None,
        }]);
        assert!(matches!(
            find_location(&gw, KEY, &address()),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn quota_exceeded_without_retry() {
        let gw = MockGateway::with_responses([status(Status::OverQueryLimit)]);
        assert!(matches!(
            find_location(&gw, KEY, &address()),
            Err(Error::QuotaExceeded)
        ));
        assert_eq!(gw.requests().len(), 1);
    }

    #[test]
    fn retry_once_without_street_and_number() {
        let gw = MockGateway::with_responses([
            status(Status::ZeroResults),
            ok("-22.31", "-49.06"),
        ]);
        let location = find_location(&gw, KEY, &address()).unwrap();
        assert_eq!(location, Coordinates::new("-22.31", "-49.06"));
        let requests = gw.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0, "Brasil");
    }

    #[test]
    fn not_found_after_retry() {
        let gw = MockGateway::with_responses([
            status(Status::ZeroResults),
            status(Status::ZeroResults),
            status(Status::ZeroResults),
        ]);
        assert!(matches!(
            find_location(&gw, KEY, &address()),
            Err(Error::NotFound)
        ));
        assert_eq!(gw.requests().len(), 2);
    }

    #[test]
    fn retry_is_scoped_to_a_single_call() {
        let gw = MockGateway::with_responses([
            status(Status::ZeroResults),
            status(Status::ZeroResults),
            status(Status::ZeroResults),
            ok("1", "2"),
        ]);
        assert!(find_location(&gw, KEY, &address()).is_err());
        assert!(find_location(&gw, KEY, &address()).is_ok());
        assert_eq!(gw.requests().len(), 4);
    }

    #[test]
    fn unknown_status_is_not_retried() {
        let denied = Status::Other("REQUEST_DENIED".into());
        let gw = MockGateway::with_responses([status(denied)]);
        assert!(matches!(
            find_location(&gw, KEY, &address()),
            Err(Error::NotFound)
        ));
        assert_eq!(gw.requests().len(), 1);
    }

    #[test]
    fn transport_failure() {
        let gw = MockGateway::default();
        let err = find_location(&gw, KEY, &address()).unwrap_err();
        assert_eq!(err.code(), 3);
        assert!(err.to_string().contains(NO_RESPONSE));
    }
}
