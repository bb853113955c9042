use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::directory::PersonRecord;

/// Fields requested from the provider; anything else is excluded server-side.
const INCLUDED_FIELDS: &str = "name,picture,email,location,phone,dob";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not reach the directory provider: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("directory provider returned: {0}")]
    Http(String),
    #[error("unexpected provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Response envelope of the randomuser-style provider.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Vec<ApiPerson>,
}

#[derive(Debug, Deserialize)]
struct ApiPerson {
    name: ApiName,
    email: String,
    location: ApiLocation,
    phone: String,
    dob: ApiDob,
    picture: ApiPicture,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    street: ApiStreet,
    city: String,
    state: String,
    postcode: Postcode,
}

#[derive(Debug, Deserialize)]
struct ApiStreet {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiDob {
    date: String,
}

#[derive(Debug, Deserialize)]
struct ApiPicture {
    large: String,
}

/// The provider sends postcodes as bare numbers for some nationalities and
/// strings for others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{n}"),
            Postcode::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<ApiPerson> for PersonRecord {
    fn from(person: ApiPerson) -> Self {
        PersonRecord {
            first_name: person.name.first,
            last_name: person.name.last,
            email: person.email,
            phone: person.phone,
            street: person.location.street.name,
            city: person.location.city,
            state: person.location.state,
            postcode: person.location.postcode.to_string(),
            picture_url: person.picture.large,
            birth_date: person.dob.date,
        }
    }
}

/// Build the provider URL with the result count, the included fields, and a
/// nationality filter.
pub fn build_api_url(endpoint: &str, count: u32, nationality: &str) -> String {
    let base = endpoint.trim_end_matches('?');
    format!(
        "{}?results={}&inc={}&noinfo&nat={}",
        base,
        count,
        INCLUDED_FIELDS,
        nationality.to_uppercase()
    )
}

/// Extract the result list from a raw response body.
pub fn parse_records(body: &str) -> Result<Vec<PersonRecord>, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(response.results.into_iter().map(PersonRecord::from).collect())
}

/// One GET against the provider. Non-success statuses become `Http` errors
/// carrying the status text; the caller logs and swallows every variant the
/// same way, leaving the directory empty. No retry.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<PersonRecord>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let text = status
            .canonical_reason()
            .map(|r| r.to_string())
            .unwrap_or_else(|| status.to_string());
        return Err(FetchError::Http(text));
    }

    let body = response.text().await.map_err(FetchError::Transport)?;
    parse_records(&body)
}
