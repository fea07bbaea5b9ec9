//! Static schema contract for the pets table: authority, column names, gender domain, DDL.

/// Authority for all content URIs served by this crate.
pub const AUTHORITY: &str = "com.example.android.pets";

/// Path segment for the pets collection.
pub const PATH_PETS: &str = "pets";

/// Table name.
pub const TABLE_PETS: &str = "pets";

pub const COLUMN_ID: &str = "_id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_BREED: &str = "breed";
pub const COLUMN_GENDER: &str = "gender";
pub const COLUMN_WEIGHT: &str = "weight";

/// Closed column list. Caller-supplied projections are sanitized against this.
pub const COLUMNS: &[&str] = &[COLUMN_ID, COLUMN_NAME, COLUMN_BREED, COLUMN_GENDER, COLUMN_WEIGHT];

/// Content URI for the pets collection: `content://<authority>/pets`.
pub fn pets_uri() -> String {
    format!("content://{}/{}", AUTHORITY, PATH_PETS)
}

/// Idempotent table DDL, run once when the store is opened.
pub const CREATE_PETS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS pets (\
 _id INTEGER PRIMARY KEY AUTOINCREMENT,\
 name TEXT NOT NULL,\
 breed TEXT,\
 gender INTEGER NOT NULL,\
 weight INTEGER NOT NULL DEFAULT 0\
)";

/// Gender domain for the `gender` column. Stored as its integer discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Unknown = 0,
    Male = 1,
    Female = 2,
}

impl Gender {
    /// Maps a stored or proposed integer to its gender, or None if outside the domain.
    pub fn from_i64(value: i64) -> Option<Gender> {
        match value {
            0 => Some(Gender::Unknown),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_domain_is_closed() {
        assert_eq!(Gender::from_i64(0), Some(Gender::Unknown));
        assert_eq!(Gender::from_i64(1), Some(Gender::Male));
        assert_eq!(Gender::from_i64(2), Some(Gender::Female));
        assert_eq!(Gender::from_i64(3), None);
        assert_eq!(Gender::from_i64(-1), None);
    }

    #[test]
    fn collection_uri_shape() {
        assert_eq!(pets_uri(), "content://com.example.android.pets/pets");
    }
}
