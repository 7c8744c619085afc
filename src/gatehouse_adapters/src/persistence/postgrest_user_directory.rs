use chrono::{DateTime, NaiveDateTime, Utc};
use gatehouse_core::{NewUser, User, UserDirectory, UserDirectoryError, UserId, Username};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

const USERS_ENDPOINT: &str = "rest/v1/users";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const FIND_COLUMNS: &str = "id,username,password";
const INSERT_COLUMNS: &str = "id,username,created_at";
// Layout of a `timestamp` column without a time zone
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// User directory backed by a PostgREST endpoint (e.g. a Supabase project).
///
/// Uniqueness of `username` is enforced by the table's unique constraint; a
/// violation on insert comes back as [`UserDirectoryError::UsernameTaken`].
#[derive(Clone)]
pub struct PostgrestUserDirectory {
    http_client: Client,
    users_url: Url,
    api_key: Secret<String>,
}

impl PostgrestUserDirectory {
    pub fn new(
        base_url: &str,
        api_key: Secret<String>,
        http_client: Client,
    ) -> Result<Self, UserDirectoryError> {
        let mut base = Url::parse(base_url).map_err(unexpected)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let users_url = base.join(USERS_ENDPOINT).map_err(unexpected)?;

        Ok(Self {
            http_client,
            users_url,
            api_key,
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http_client
            .request(method, self.users_url.clone())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }
}

#[async_trait::async_trait]
impl UserDirectory for PostgrestUserDirectory {
    #[tracing::instrument(name = "Retrieving user from directory", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<User, UserDirectoryError> {
        let filter = format!("eq.{username}");
        let response = self
            .request(Method::GET)
            .query(&[("select", FIND_COLUMNS), ("username", filter.as_str())])
            .send()
            .await
            .map_err(unexpected)?;

        let mut rows: Vec<UserRow> = read_rows(response).await?;
        match rows.len() {
            0 => Err(UserDirectoryError::UserNotFound),
            1 => rows.remove(0).try_into(),
            n => Err(UserDirectoryError::Unexpected(format!(
                "Expected a single user, found {n}"
            ))),
        }
    }

    #[tracing::instrument(name = "Adding user to directory", skip_all)]
    async fn insert(&self, user: NewUser) -> Result<User, UserDirectoryError> {
        let body = [InsertUserRow {
            username: user.username().as_str(),
            password: user.password_digest().as_ref().expose_secret(),
        }];

        let response = self
            .request(Method::POST)
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .query(&[("select", INSERT_COLUMNS)])
            .json(&body)
            .send()
            .await
            .map_err(unexpected)?;

        let mut rows: Vec<InsertedRow> = read_rows(response).await?;
        if rows.len() != 1 {
            return Err(UserDirectoryError::Unexpected(format!(
                "Expected one inserted row, got {}",
                rows.len()
            )));
        }
        let row = rows.remove(0);

        Ok(user.into_user(row.id, row.created_at))
    }
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<T, UserDirectoryError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(unexpected);
    }

    let error = response
        .json::<PostgrestError>()
        .await
        .unwrap_or_default();

    if status == reqwest::StatusCode::CONFLICT || error.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return Err(UserDirectoryError::UsernameTaken);
    }

    tracing::warn!(%status, code = ?error.code, "User directory request failed");
    Err(UserDirectoryError::Unexpected(
        error.message.unwrap_or_else(|| status.to_string()),
    ))
}

fn unexpected(e: impl std::fmt::Display) -> UserDirectoryError {
    UserDirectoryError::Unexpected(e.to_string())
}

#[derive(Serialize)]
struct InsertUserRow<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct UserRow {
    id: UserId,
    username: String,
    password: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserDirectoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::parse(row.username).map_err(unexpected)?;
        Ok(User::new(
            row.id,
            username,
            row.password.into(),
            None,
        ))
    }
}

#[derive(Deserialize)]
struct InsertedRow {
    id: UserId,
    // The row is already committed here, so an odd timestamp must not fail the insert
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    // `timestamp` columns come back without an offset and hold UTC
    match NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT) {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            tracing::warn!(created_at = raw, error = %e, "Unrecognised timestamp from user directory");
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}
