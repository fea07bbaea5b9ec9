//! Content-URI classification. The pattern set is fixed, so routing is a closed
//! enum rather than a runtime-registered matcher.

use crate::contract;

/// Route kind for an incoming content URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Operates over the whole pets table, optionally filtered.
    Collection,
    /// Operates on exactly one row, addressed by the trailing id segment.
    Item(i64),
    /// Matches neither pattern. Fatal to whichever operation saw it.
    Unknown,
}

impl Route {
    /// Classifies a URI. Pure function of the string; never touches storage.
    ///
    /// `content://<authority>/pets` is `Collection`;
    /// `content://<authority>/pets/<decimal digits>` is `Item(id)`;
    /// everything else (wrong authority, extra segments, non-digit or
    /// overflowing suffix) is `Unknown`. Matching is exact over the whole
    /// string: a URI carrying a query string or fragment is `Unknown`, since
    /// no identifier in the contract carries one.
    pub fn classify(uri: &str) -> Route {
        let collection = contract::pets_uri();
        let Some(rest) = uri.strip_prefix(collection.as_str()) else {
            return Route::Unknown;
        };
        if rest.is_empty() {
            return Route::Collection;
        }
        let Some(segment) = rest.strip_prefix('/') else {
            return Route::Unknown;
        };
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Route::Unknown;
        }
        match segment.parse::<i64>() {
            Ok(id) => Route::Item(id),
            Err(_) => Route::Unknown,
        }
    }
}

/// Appends a freshly assigned row id to a collection URI, producing the item URI.
pub fn with_appended_id(uri: &str, id: i64) -> String {
    format!("{}/{}", uri, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::pets_uri;

    #[test]
    fn collection_uri_classifies_as_collection() {
        assert_eq!(Route::classify(&pets_uri()), Route::Collection);
    }

    #[test]
    fn item_uri_recovers_id_exactly() {
        assert_eq!(
            Route::classify(&format!("{}/42", pets_uri())),
            Route::Item(42)
        );
        assert_eq!(Route::classify(&format!("{}/0", pets_uri())), Route::Item(0));
    }

    #[test]
    fn unknown_uris() {
        assert_eq!(Route::classify("content://other.authority/pets"), Route::Unknown);
        assert_eq!(Route::classify("content://com.example.android.pets/cats"), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}/", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}/abc", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}/12x", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}/1/2", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(""), Route::Unknown);
    }

    #[test]
    fn query_string_or_fragment_is_unknown() {
        // Stricter than segment-based matching on purpose: contract URIs
        // never carry a query string or fragment.
        assert_eq!(Route::classify(&format!("{}?x=1", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}/7?x=1", pets_uri())), Route::Unknown);
        assert_eq!(Route::classify(&format!("{}#top", pets_uri())), Route::Unknown);
    }

    #[test]
    fn overflowing_id_is_unknown() {
        assert_eq!(
            Route::classify(&format!("{}/99999999999999999999", pets_uri())),
            Route::Unknown
        );
    }

    #[test]
    fn appended_id_round_trips() {
        let uri = with_appended_id(&pets_uri(), 7);
        assert_eq!(Route::classify(&uri), Route::Item(7));
    }
}
