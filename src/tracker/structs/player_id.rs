//! Player identity for statistics records.

/// The unique identity of a player, an e-mail-shaped string.
///
/// Identities are compared and stored exactly as given: no case folding,
/// trimming or other normalization is ever applied, so `Foo@example.com`
/// and `foo@example.com` are two different players.
///
/// # Structure
///
/// A valid identity is at most 320 bytes, contains exactly one `@` with
/// non-empty text on both sides, and no whitespace or control characters.
/// Parsing via `FromStr` enforces this shape.
///
/// # Example
///
/// ```rust
/// use std::str::FromStr;
/// use guesstats_actix::tracker::structs::player_id::PlayerId;
///
/// let player = PlayerId::from_str("alice@example.com").unwrap();
/// assert_eq!(player.to_string(), "alice@example.com");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct PlayerId(pub String);
