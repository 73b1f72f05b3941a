//! Key encoding utilities for `RocksDB`.
//!
//! All integers are encoded big-endian so that byte order matches numeric
//! order and range scans walk the index in date order.

use gamedge_core::{ArticleId, GameId, IdError};

/// Key of the cached OAuth credentials in the `auth` column family.
pub const OAUTH_CREDENTIALS_KEY: &[u8] = b"oauth_credentials";

/// Length of a release date index key.
pub const RELEASE_DATE_KEY_LEN: usize = 16;

/// Encode a game key (the big-endian game ID).
#[must_use]
pub const fn game_key(game_id: GameId) -> [u8; 8] {
    game_id.to_be_bytes()
}

/// Encode an article key (the big-endian article ID).
#[must_use]
pub const fn article_key(article_id: ArticleId) -> [u8; 8] {
    article_id.to_be_bytes()
}

/// Encode a unix timestamp so that byte order matches signed order.
///
/// Flipping the sign bit maps `i64::MIN..=i64::MAX` onto `0..=u64::MAX`.
#[must_use]
pub const fn release_date_prefix(release_date: i64) -> [u8; 8] {
    #[allow(clippy::cast_sign_loss)]
    let shifted = (release_date as u64) ^ (1 << 63);
    shifted.to_be_bytes()
}

/// Decode a timestamp encoded by [`release_date_prefix`].
#[must_use]
pub const fn decode_release_date(bytes: [u8; 8]) -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let release_date = (u64::from_be_bytes(bytes) ^ (1 << 63)) as i64;
    release_date
}

/// Encode a release date index key: `release_date || game_id`.
#[must_use]
pub fn release_date_key(release_date: i64, game_id: GameId) -> Vec<u8> {
    let mut key = Vec::with_capacity(RELEASE_DATE_KEY_LEN);
    key.extend_from_slice(&release_date_prefix(release_date));
    key.extend_from_slice(&game_key(game_id));
    key
}

/// Split a release date index key into its release date and game ID.
///
/// # Errors
///
/// Returns `IdError::InvalidLength` if the key is not 16 bytes.
pub fn split_release_date_key(key: &[u8]) -> Result<(i64, GameId), IdError> {
    if key.len() != RELEASE_DATE_KEY_LEN {
        return Err(IdError::InvalidLength {
            expected: RELEASE_DATE_KEY_LEN,
            got: key.len(),
        });
    }
    let (date_bytes, id_bytes) = key.split_at(8);
    let mut date = [0u8; 8];
    date.copy_from_slice(date_bytes);
    Ok((decode_release_date(date), GameId::from_be_slice(id_bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_date_key_roundtrip() {
        let key = release_date_key(1_717_200_000, GameId::new(1942));
        assert_eq!(key.len(), RELEASE_DATE_KEY_LEN);

        let (date, id) = split_release_date_key(&key).unwrap();
        assert_eq!(date, 1_717_200_000);
        assert_eq!(id, GameId::new(1942));
    }

    #[test]
    fn release_dates_sort_chronologically() {
        let dates = [i64::MIN, -86_400, -1, 0, 1, 86_400, i64::MAX];
        let encoded: Vec<_> = dates.iter().map(|d| release_date_prefix(*d)).collect();

        let mut sorted = encoded.clone();
        sorted.sort();
        assert_eq!(encoded, sorted);

        for date in dates {
            assert_eq!(decode_release_date(release_date_prefix(date)), date);
        }
    }

    #[test]
    fn same_date_orders_by_game_id() {
        let a = release_date_key(100, GameId::new(1));
        let b = release_date_key(100, GameId::new(2));
        let later = release_date_key(101, GameId::new(0));
        assert!(a < b);
        assert!(b < later);
    }

    #[test]
    fn truncated_key_rejected() {
        assert!(split_release_date_key(&[0u8; 9]).is_err());
    }
}
