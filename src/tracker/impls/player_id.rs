use std::fmt;
use std::fmt::Formatter;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::player_id::PlayerId;

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !valid_identity(s) {
            return Err(CustomError::new("invalid player identity"));
        }
        Ok(PlayerId(s.to_string()))
    }
}

impl serde::ser::Serialize for PlayerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for PlayerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PlayerIdVisitor;

        impl<'de> serde::de::Visitor<'de> for PlayerIdVisitor {
            type Value = PlayerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an e-mail-shaped player identity")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if !valid_identity(v) {
                    return Err(serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(v),
                        &"expected local@domain with no whitespace",
                    ));
                }

                Ok(PlayerId(v.to_string()))
            }
        }

        des.deserialize_str(PlayerIdVisitor)
    }
}

#[inline(always)]
fn valid_identity(value: &str) -> bool {
    if value.is_empty() || value.len() > 320 {
        return false;
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false
    }
}
