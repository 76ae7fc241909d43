//! User projection returned by `GET /api/auth/me`.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::codec::iso8601;
use crate::domain::{User, UserId};

/// Public view of the signed-in user: `id, email, name, picture?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    /// User identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Full name.
    pub name: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl CurrentUserDto {
    /// Expand into a [`User`] with an empty provider id and both timestamps
    /// taken from `clock`.
    ///
    /// The projection does not carry provider id or timestamps, so the
    /// generated values are placeholders.
    #[must_use]
    pub fn into_user(self, clock: &dyn Clock) -> User {
        let now = iso8601::now(clock);
        self.into_user_with(String::new(), now, now)
    }

    /// Expand into a [`User`] with explicit provider id and timestamps.
    #[must_use]
    pub fn into_user_with(
        self,
        google_id: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> User {
        let Self {
            id,
            email,
            name,
            picture,
        } = self;
        let mut builder = User::builder(google_id, email, name).id(id);
        if let Some(url) = picture {
            builder = builder.picture(url);
        }
        builder.build_at(created_at, updated_at)
    }
}

impl From<&User> for CurrentUserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            picture: user.picture().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::codec::WIRE_CODEC;
    use crate::test_support::{fixture_clock, fixture_timestamp, timestamp};

    fn current_user() -> CurrentUserDto {
        CurrentUserDto {
            id: "660e8400-e29b-41d4-a716-446655440000"
                .parse()
                .expect("valid UUID"),
            email: "john.doe@example.com".to_owned(),
            name: "John Doe".to_owned(),
            picture: None,
        }
    }

    #[rstest]
    fn into_user_uses_placeholder_provider_id_and_clock() {
        let user = current_user().into_user(&fixture_clock());
        assert_eq!(user.google_id(), "");
        assert_eq!(user.created_at(), fixture_timestamp());
        assert_eq!(user.updated_at(), fixture_timestamp());
        assert_eq!(user.initials(), "JD");
    }

    #[rstest]
    fn into_user_with_keeps_supplied_values() {
        let created = timestamp(2023, 5, 1, 9, 0, 0);
        let updated = timestamp(2024, 1, 1, 0, 0, 0);
        let user = current_user().into_user_with("123456789", created, updated);
        assert_eq!(user.google_id(), "123456789");
        assert_eq!(user.created_at(), created);
        assert_eq!(user.updated_at(), updated);
    }

    #[rstest]
    fn projection_round_trips_through_user() {
        let dto = CurrentUserDto {
            picture: Some("https://example.com/avatar.jpg".to_owned()),
            ..current_user()
        };
        let user = dto.clone().into_user(&fixture_clock());
        assert_eq!(CurrentUserDto::from(&user), dto);
    }

    #[rstest]
    #[case(current_user())]
    #[case(CurrentUserDto {
        picture: Some("https://example.com/avatar.jpg".to_owned()),
        ..current_user()
    })]
    fn current_user_round_trips_through_wire(#[case] original: CurrentUserDto) {
        let encoded = WIRE_CODEC.encode(&original).expect("encode");
        let decoded: CurrentUserDto = WIRE_CODEC.decode_str(&encoded).expect("decode");
        assert_eq!(decoded, original);
    }

    #[rstest]
    fn wire_shape_has_no_provider_fields() {
        let encoded = WIRE_CODEC.encode(&current_user()).expect("encode");
        insta::assert_snapshot!(encoded, @r#"
        {
          "email": "john.doe@example.com",
          "id": "660e8400-e29b-41d4-a716-446655440000",
          "name": "John Doe"
        }
        "#);
    }
}
