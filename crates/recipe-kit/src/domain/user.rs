//! User data model.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::codec::iso8601;
use crate::domain::UserId;

/// Application user authenticated through an external identity provider.
///
/// ## Wire form
/// `id, googleId, email, name, picture?, createdAt, updatedAt`.
///
/// # Examples
/// ```
/// use mockable::DefaultClock;
/// use recipe_kit::domain::User;
///
/// let user = User::builder("123456789", "ada@example.com", "Ada Lovelace").build(&DefaultClock);
/// assert_eq!(user.initials(), "AL");
/// assert_eq!(user.display_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    google_id: String,
    email: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    #[serde(with = "iso8601")]
    created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    updated_at: DateTime<Utc>,
}

impl User {
    /// Start building a user from the identity provider's claims.
    pub fn builder(
        google_id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> UserBuilder {
        UserBuilder {
            id: None,
            google_id: google_id.into(),
            email: email.into(),
            name: name.into(),
            picture: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Subject identifier issued by the identity provider.
    #[must_use]
    pub fn google_id(&self) -> &str {
        &self.google_id
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Avatar URL.
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update time.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Name shown in the interface. Currently the full name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Uppercased initials for avatars.
    ///
    /// With two or more space-separated tokens this is the first letter of
    /// each of the first two; with a single token it is that token's first
    /// two characters. An empty name has no initials.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut tokens = self.name.split(' ').filter(|token| !token.is_empty());
        match (tokens.next(), tokens.next()) {
            (Some(first), Some(second)) => {
                leading_uppercase(first, 1) + &leading_uppercase(second, 1)
            }
            (Some(only), None) => leading_uppercase(only, 2),
            _ => String::new(),
        }
    }
}

fn leading_uppercase(token: &str, count: usize) -> String {
    token
        .chars()
        .take(count)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Builder for [`User`].
///
/// Missing id is random; missing timestamps come from the clock passed to
/// [`UserBuilder::build`].
#[derive(Debug, Clone)]
#[must_use]
pub struct UserBuilder {
    id: Option<UserId>,
    google_id: String,
    email: String,
    name: String,
    picture: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserBuilder {
    /// Use a known identifier.
    pub const fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the avatar URL.
    pub fn picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Set the creation time.
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the last update time.
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Assemble the user.
    ///
    /// A missing `created_at` is the clock time; a missing `updated_at` is the
    /// later of the clock time and `created_at`.
    #[must_use]
    pub fn build(self, clock: &dyn Clock) -> User {
        let now = iso8601::now(clock);
        let created_at = self.created_at.unwrap_or(now);
        let updated_at = self.updated_at.unwrap_or_else(|| now.max(created_at));
        self.build_at(created_at, updated_at)
    }

    /// Assemble the user with explicit timestamps, ignoring any set earlier.
    #[must_use]
    pub fn build_at(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> User {
        User {
            id: self.id.unwrap_or_else(UserId::random),
            google_id: self.google_id,
            email: self.email,
            name: self.name,
            picture: self.picture,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::codec::WIRE_CODEC;
    use crate::test_support::{fixture_clock, fixture_timestamp, timestamp};

    fn named(name: &str) -> User {
        User::builder("123456789", "john.doe@example.com", name).build(&fixture_clock())
    }

    #[rstest]
    #[case("John Doe", "JD")]
    #[case("Prince", "PR")]
    #[case("John Paul Jones", "JP")]
    #[case("  ada   lovelace ", "AL")]
    #[case("X", "X")]
    #[case("", "")]
    fn initials(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(named(name).initials(), expected);
    }

    #[rstest]
    fn display_name_is_the_name() {
        assert_eq!(named("John Doe").display_name(), "John Doe");
    }

    #[rstest]
    fn builder_defaults_timestamps_from_clock() {
        let user = named("John Doe");
        assert_eq!(user.created_at(), fixture_timestamp());
        assert_eq!(user.updated_at(), fixture_timestamp());
        assert!(user.picture().is_none());
    }

    #[rstest]
    fn future_creation_time_pulls_update_time_forward() {
        let created = timestamp(2024, 6, 1, 12, 0, 0);
        let user = User::builder("123456789", "john.doe@example.com", "John Doe")
            .created_at(created)
            .build(&fixture_clock());
        assert_eq!(user.created_at(), created);
        assert_eq!(user.updated_at(), created);
    }

    #[rstest]
    fn past_creation_time_keeps_clock_update_time() {
        let created = timestamp(2023, 6, 1, 12, 0, 0);
        let user = User::builder("123456789", "john.doe@example.com", "John Doe")
            .created_at(created)
            .build(&fixture_clock());
        assert_eq!(user.updated_at(), fixture_timestamp());
    }

    #[rstest]
    fn encodes_camel_case_keys_and_omits_missing_picture() {
        let value = serde_json::to_value(named("John Doe")).expect("encode");
        let object = value.as_object().expect("object");
        assert_eq!(object.get("googleId"), Some(&json!("123456789")));
        assert_eq!(object.get("updatedAt"), Some(&json!("2024-01-14T10:30:00Z")));
        assert!(!object.contains_key("picture"));
        assert!(!object.contains_key("initials"));
    }

    #[rstest]
    fn round_trips_with_picture() {
        let user = User::builder("42", "ada@example.com", "Ada")
            .picture("https://example.com/avatar.jpg")
            .build(&fixture_clock());
        let encoded = WIRE_CODEC.encode(&user).expect("encode");
        let decoded: User = WIRE_CODEC.decode_str(&encoded).expect("decode");
        assert_eq!(decoded, user);
    }

    #[rstest]
    fn decode_requires_google_id() {
        let payload = json!({
            "id": "660e8400-e29b-41d4-a716-446655440000",
            "email": "john.doe@example.com",
            "name": "John Doe",
            "createdAt": "2024-01-14T10:30:00Z",
            "updatedAt": "2024-01-14T10:30:00Z",
        });
        let err = WIRE_CODEC
            .decode::<User>(payload.to_string().as_bytes())
            .expect_err("googleId missing");
        assert!(err.to_string().contains("googleId"), "got {err}");
    }
}
